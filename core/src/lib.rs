pub mod dispatch;
pub mod formulas;
pub mod metrics;
pub mod models;
pub mod packages;
pub mod report;
pub mod types;

pub use dispatch::{read_package, PackageError};
pub use models::{Running, SportsWalking, Swimming, Workout};
pub use packages::{read_packages_json, summarize_packages_json};
pub use report::{format_summary, print_summary};
pub use types::TrainingSummary;
