// Adapters layer: HTTP implementations of the vacancy source port.

pub mod headhunter;
pub mod http;
pub mod superjob;

pub use headhunter::HeadHunterSource;
pub use superjob::SuperJobSource;
