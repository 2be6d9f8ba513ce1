//! Console status formatter

use colored::Colorize;

/// Snapshot of the running configuration for status display
///
/// Built by the binary from the loaded settings so this layer never sees the
/// settings types (or the credentials) themselves.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub version: String,
    pub model: String,
    pub host: String,
    pub port: u16,
    pub default_inquirer: String,
    pub review_enabled: bool,
    pub log_level: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub voice_available: bool,
    pub input_devices: Vec<String>,
}

/// Formats the status report for console display
pub struct StatusFormatter;

impl StatusFormatter {
    pub fn format(info: &StatusInfo) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n{}\n",
            "RICA - System Status".bold(),
            "=".repeat(40)
        ));
        output.push_str(&format!("{} {}\n", "Version:".cyan().bold(), info.version));
        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), info.model));
        output.push_str(&format!(
            "{} {}:{}\n",
            "Server:".cyan().bold(),
            info.host,
            info.port
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Default inquirer:".cyan().bold(),
            info.default_inquirer
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Review stage:".cyan().bold(),
            if info.review_enabled {
                "enabled"
            } else {
                "disabled"
            }
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Log level:".cyan().bold(),
            info.log_level
        ));

        output.push_str(&format!("\n{}\n", "Audio:".cyan().bold()));
        output.push_str(&format!(
            "  Voice support: {}\n",
            if info.voice_available { "yes" } else { "no" }
        ));
        output.push_str(&format!(
            "  Sample rate: {} Hz, {} channel(s)\n",
            info.sample_rate, info.channels
        ));
        if info.input_devices.is_empty() {
            output.push_str("  Input devices: none detected\n");
        } else {
            output.push_str("  Input devices:\n");
            for device in &info.input_devices {
                output.push_str(&format!("    - {}\n", device));
            }
        }

        output
    }
}
