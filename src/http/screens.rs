//! Content fragments for each portal screen.
//!
//! Every value that came from a client or the host is escaped here, because
//! `render_page` inserts fragments verbatim.

use crate::telemetry::{format_mib, format_uptime, DeviceStatus};

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Network form; `error` adds a callout above the fields.
pub fn setup_form(saved_ssid: Option<&str>, error: Option<&str>) -> String {
    let notice = match error {
        Some(message) => format!("<div class='info'>{}</div>", escape_html(message)),
        None => String::new(),
    };

    format!(
        concat!(
            "<h1>WiFi Setup</h1>",
            "{notice}",
            "<form method='post' action='/save'>",
            "<label for='ssid'>Network name (SSID)</label>",
            "<input id='ssid' name='ssid' type='text' maxlength='32' value='{ssid}' required>",
            "<label for='password'>Password</label>",
            "<input id='password' name='password' type='password' maxlength='64'>",
            "<button class='btn' type='submit'>Save</button>",
            "</form>",
            "<a class='btn' href='/status'>Device status</a>"
        ),
        notice = notice,
        ssid = escape_html(saved_ssid.unwrap_or("")),
    )
}

pub fn saved_view(ssid: &str) -> String {
    format!(
        concat!(
            "<h1>Saved</h1>",
            "<div class='success'>Settings for <b>{ssid}</b> were saved. ",
            "The device will now try to join this network.</div>",
            "<a class='btn' href='/status'>Device status</a>"
        ),
        ssid = escape_html(ssid),
    )
}

pub fn status_view(status: &DeviceStatus, saved_ssid: Option<&str>, app_version: &str) -> String {
    let network = match saved_ssid {
        Some(ssid) => escape_html(ssid),
        None => "not configured".to_string(),
    };

    format!(
        concat!(
            "<h1>Device Status</h1>",
            "<div class='info'>",
            "<div>Host: {host}</div>",
            "<div>OS: {os}</div>",
            "<div>Uptime: {uptime}</div>",
            "<div>Memory: {used} / {total} ({percent}%)</div>",
            "<div>Network: {network}</div>",
            "<div>Version: {version}</div>",
            "</div>",
            "<a class='btn' href='/'>Change network</a>",
            "<form method='post' action='/reset'>",
            "<button class='btn btn-danger' type='submit'>Reset settings</button>",
            "</form>"
        ),
        host = escape_html(&status.host_name),
        os = escape_html(&status.os),
        uptime = format_uptime(status.uptime_secs),
        used = format_mib(status.memory_used_bytes),
        total = format_mib(status.memory_total_bytes),
        percent = status.memory_percent(),
        network = network,
        version = escape_html(app_version),
    )
}

pub fn not_found_view(path: &str) -> String {
    format!(
        concat!(
            "<h1>Not Found</h1>",
            "<div class='info'>Nothing lives at <code>{path}</code>.</div>",
            "<a class='btn' href='/'>Back to setup</a>"
        ),
        path = escape_html(path),
    )
}

/// Generic callout for a rejected request.
pub fn error_view(heading: &str, message: &str) -> String {
    format!(
        concat!(
            "<h1>{heading}</h1>",
            "<div class='info'>{message}</div>",
            "<a class='btn' href='/'>Back to setup</a>"
        ),
        heading = escape_html(heading),
        message = escape_html(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_status() -> DeviceStatus {
        DeviceStatus {
            host_name: "m5-<core>".to_string(),
            os: "Linux 6.1".to_string(),
            uptime_secs: 61,
            memory_used_bytes: 1_048_576,
            memory_total_bytes: 4_194_304,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_setup_form_prefills_escaped_ssid() {
        let html = setup_form(Some("x' onfocus='alert(1)"), None);
        assert!(html.contains("value='x&#39; onfocus=&#39;alert(1)'"));
        assert!(html.contains("action='/save'"));
        assert!(!html.contains("class='info'"));
    }

    #[test]
    fn test_setup_form_shows_error() {
        let html = setup_form(None, Some("SSID is required"));
        assert!(html.contains("<div class='info'>SSID is required</div>"));
        assert!(html.contains("value=''"));
    }

    #[test]
    fn test_saved_view_uses_success_callout() {
        let html = saved_view("<home>");
        assert!(html.contains("<div class='success'>"));
        assert!(html.contains("<b>&lt;home&gt;</b>"));
    }

    #[test]
    fn test_status_view_lists_device_facts() {
        let html = status_view(&sample_status(), Some("home"), "v0.0.1");
        assert!(html.contains("Host: m5-&lt;core&gt;"));
        assert!(html.contains("Uptime: 1m 1s"));
        assert!(html.contains("Memory: 1.0 MiB / 4.0 MiB (25%)"));
        assert!(html.contains("Network: home"));
        assert!(html.contains("Version: v0.0.1"));
        assert!(html.contains("class='btn btn-danger'"));
    }

    #[test]
    fn test_status_view_without_network() {
        let html = status_view(&sample_status(), None, "v1");
        assert!(html.contains("Network: not configured"));
    }

    #[test]
    fn test_error_view_shows_message() {
        let html = error_view("Request Too Large", "The submitted form is too large.");
        assert!(html.starts_with("<h1>Request Too Large</h1>"));
        assert!(html.contains("<div class='info'>The submitted form is too large.</div>"));
    }

    #[test]
    fn test_not_found_escapes_path() {
        let html = not_found_view("/<script>");
        assert!(html.contains("<code>/&lt;script&gt;</code>"));
    }
}
