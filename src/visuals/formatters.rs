use std::path::Path;

pub fn format_resolution(resolution: Option<u32>) -> String {
    match resolution {
        Some(r) => format!("{r} um"),
        None => "-".to_string(),
    }
}

pub fn format_time_point(time_point: Option<f64>) -> String {
    match time_point {
        Some(t) => format!("{t:.3e} s"),
        None => "all".to_string(),
    }
}

pub fn format_source(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
