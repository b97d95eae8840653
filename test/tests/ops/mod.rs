mod arithmetic_tests;
mod bitwise_tests;
