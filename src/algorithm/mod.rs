/// Seed candidate queue ranked by record distance
pub mod candidates;
/// MDL description length of candidate regions and run baselines
pub mod complexity;
/// Search configuration and the seed-grow-decide control loop
pub mod executor;
/// Greedy nearest-neighbour growth of one region
pub mod growth;
/// Dimension pruning of kept regions
pub mod pruning;
/// Record samples for seeding and growth
pub mod sample;
