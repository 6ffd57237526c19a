mod scan;

pub use scan::collect_paths;
