pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_ambient_effects() -> bool {
    true
}

pub(crate) fn default_ember_count() -> usize {
    35
}

pub(crate) fn default_ember_seed() -> u64 {
    7
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
