//! Test suite for recipehub
//!
//! This module organizes all tests
