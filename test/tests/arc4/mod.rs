mod composite_tests;
mod mutation_tests;
mod roundtrip_tests;
