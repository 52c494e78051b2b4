//! Property-based tests for the quadrature rule and the adaptive driver.
