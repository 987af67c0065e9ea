mod overview;
pub use overview::PerformanceOverview;

mod competition;
pub use competition::SpecificCompetition;
