pub mod thing_cache;
