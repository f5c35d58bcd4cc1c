mod simulated_oauth;

pub use simulated_oauth::SimulatedOAuth;
