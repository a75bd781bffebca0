mod completeness;
mod persistence;
