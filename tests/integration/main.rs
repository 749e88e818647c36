// Single integration test binary.
// All test modules share one PostgreSQL container via LazyLock,
// with per-test isolation via CREATE DATABASE ... TEMPLATE.


mod test_validation_e2e;
