use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::models::RequestLog;

/// Rows shown by the activity view.
pub const LOG_VIEW_LIMIT: i64 = 50;

const LOG_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Hides the network part of an address: `A.B.C.D` becomes `xxx.yyy.C.D`,
/// IPv6 loses its first two groups.
pub fn mask_ip(ip: &str) -> String {
    let octets: Vec<&str> = ip.split('.').collect();
    let is_ipv4 = octets.len() == 4
        && octets.iter().all(|octet| {
            (1..=3).contains(&octet.len()) && octet.bytes().all(|b| b.is_ascii_digit())
        });

    if is_ipv4 {
        return format!("xxx.yyy.{}.{}", octets[2], octets[3]);
    }

    if ip.contains(':') {
        return ip
            .split(':')
            .enumerate()
            .map(|(index, group)| if index < 2 { "xxxx" } else { group })
            .collect::<Vec<_>>()
            .join(":");
    }

    String::from("xxx.yyy.?.?")
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// `[ts] ip METHOD /endpoint ?query`, every field escaped.
pub fn render_log_line(log: &RequestLog) -> Result<String, time::error::Format> {
    let ts = log.ts.format(LOG_TIME_FORMAT)?;

    let mut line = format!(
        "[{}] {} {} /{}",
        escape_html(&ts),
        escape_html(&mask_ip(&log.ip)),
        escape_html(&log.method),
        escape_html(&log.endpoint),
    );

    if !log.query_string.is_empty() {
        line.push_str(" ?");
        line.push_str(&escape_html(&log.query_string));
    }

    Ok(line)
}

pub fn render_log(logs: &[RequestLog]) -> Result<String, time::error::Format> {
    let mut html = String::from("<div style='font-family: monospace; font-size: 13px;'>");

    if logs.is_empty() {
        html.push_str("<div>No requests recorded.</div>");
    }

    for log in logs {
        html.push_str("<div>");
        html.push_str(&render_log_line(log)?);
        html.push_str("</div>");
    }

    html.push_str("</div>");

    Ok(html)
}
