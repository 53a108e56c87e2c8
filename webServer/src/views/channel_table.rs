use crate::models::directory_channel::DirectoryChannel;

use super::layout::{html_escape, page};

const UNNAMED_DISCORD_CHANNEL: &str = "(unnamed discord channel)";
const PAGE_LENGTH: u32 = 50;
const SORT_COLUMN: u32 = 0;

/// A numeric cell: `order` drives sorting, `display` is what gets shown.
#[derive(Debug, Clone, PartialEq)]
pub struct SortableCell {
    pub order: u64,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelRow {
    pub id: i64,
    pub name: String,
    pub mode: String,
    pub platform: String,
    pub line_count: SortableCell,
    pub byte_length: SortableCell,
    pub activity_href: String,
}

/// Rounds half away from zero to the given number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub fn format_byte_length(bytes: u64) -> String {
    let bytes = bytes as f64;
    if bytes >= 1e9 {
        format!("{} GB", round_to(bytes / 1e9, 3))
    } else if bytes >= 1e6 {
        format!("{} MB", round_to(bytes / 1e6, 3))
    } else {
        format!("{} kB", round_to(bytes / 1e3, 0))
    }
}

/// Groups digits in threes with spaces: `1234567` -> `1 234 567`.
pub fn format_line_count(lines: u64) -> String {
    let digits = lines.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    grouped
}

/// Discord channels without a description are most likely inactive.
pub fn is_listed(channel: &DirectoryChannel) -> bool {
    !channel.is_discord() || channel.has_description()
}

pub fn channel_row(channel: &DirectoryChannel) -> ChannelRow {
    let name = if channel.is_discord() {
        match channel.description.as_deref() {
            Some(description) if !description.is_empty() => description.to_string(),
            _ => UNNAMED_DISCORD_CHANNEL.to_string(),
        }
    } else {
        channel.name.clone()
    };

    let line_count = channel.line_count.unwrap_or(0);
    let byte_length = channel.byte_length.unwrap_or(0);

    ChannelRow {
        id: channel.id,
        name,
        mode: channel.mode.clone(),
        platform: channel.platform_name.clone(),
        line_count: SortableCell {
            order: line_count,
            display: format_line_count(line_count),
        },
        byte_length: SortableCell {
            order: byte_length,
            display: format_byte_length(byte_length),
        },
        activity_href: format!(
            "/bot/channels/{}-{}/activity",
            urlencoding::encode(&channel.name.to_lowercase()),
            channel.id
        ),
    }
}

pub fn channel_rows(channels: &[DirectoryChannel]) -> Vec<ChannelRow> {
    channels
        .iter()
        .filter(|channel| is_listed(channel))
        .map(channel_row)
        .collect()
}

fn sortable_td(cell: &SortableCell) -> String {
    format!(
        "<td data-order=\"{}\">{}</td>",
        cell.order,
        html_escape(&cell.display)
    )
}

pub fn render_channel_table(rows: &[ChannelRow]) -> String {
    let body_rows: String = rows
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td>{}{}<td data-order=\"{}\"><a href=\"{}\">{}</a></td></tr>\n",
                html_escape(&row.name),
                html_escape(&row.mode),
                html_escape(&row.platform),
                sortable_td(&row.line_count),
                sortable_td(&row.byte_length),
                row.id,
                html_escape(&row.activity_href),
                row.id,
            )
        })
        .collect();

    let head = format!(
        r##"<link rel="stylesheet" href="https://cdn.datatables.net/1.13.8/css/jquery.dataTables.min.css">
<script src="https://code.jquery.com/jquery-3.7.1.min.js"></script>
<script src="https://cdn.datatables.net/1.13.8/js/jquery.dataTables.min.js"></script>
<script>
$(function () {{
    $("#channels").DataTable({{
        pageLength: {PAGE_LENGTH},
        order: [[{SORT_COLUMN}, "asc"]]
    }});
}});
</script>"##
    );

    let body = format!(
        r#"<h1>Channels</h1>
<table id="channels">
<thead><tr><th>Name</th><th>Mode</th><th>Platform</th><th>LineCount</th><th>ByteLength</th><th>ID</th></tr></thead>
<tbody>
{body_rows}</tbody>
</table>"#
    );

    page("Channels", &head, &body)
}
