use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::PathBuf;
use chrono::Local;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Route log lines to a fresh file under the user's cache directory.
pub fn init_logging() -> std::io::Result<PathBuf> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("roster")
        .join("logs");
    
    create_dir_all(&log_dir)?;
    
    let log_file = log_dir.join(format!("roster-{}.log", Local::now().format("%Y%m%d-%H%M%S")));
    set_log_file(Some(log_file.clone()));
    
    log_info(&format!("Logging initialized to: {}", log_file.display()));
    
    Ok(log_file)
}

pub fn set_log_file(path: Option<PathBuf>) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = path;
    }
}

pub fn log_error(message: &str) {
    log_with_level("ERROR", message);
}

pub fn log_info(message: &str) {
    log_with_level("INFO", message);
}

pub fn log_debug(message: &str) {
    log_with_level("DEBUG", message);
}

#[allow(deprecated)]
pub fn log_panic_info(info: &std::panic::PanicInfo) {
    let mut message = String::from("PANIC: ");
    
    if let Some(location) = info.location() {
        message.push_str(&format!("at {}:{}:{} - ", 
            location.file(), 
            location.line(), 
            location.column()
        ));
    }
    
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        message.push_str(s);
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        message.push_str(s);
    } else {
        message.push_str("Unknown panic payload");
    }
    
    log_error(&message);
}

pub fn format_line(level: &str, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!("[{}] {} - {}", timestamp, level, message)
}

fn log_with_level(level: &str, message: &str) {
    let Some(log_file) = get_log_file_path() else { return };

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
    {
        let _ = writeln!(file, "{}", format_line(level, message));
    }
    
    // stderr stays quiet, it would tear through the dashboard
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|guard| guard.clone())
}
