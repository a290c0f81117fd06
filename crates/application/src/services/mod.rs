mod session;

pub use session::SessionScope;
