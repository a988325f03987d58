/*
Catalog-wide and configuration tests live in the library crate so they can
reach crate-private items (the raw CODES/CLASSES tables, Settings::load).
Scenarios that only need the public API are in the top-level tests/ directory.
 */
