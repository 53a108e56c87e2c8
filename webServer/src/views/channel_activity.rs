use crate::activity::aggregator::ChannelActivity;

use super::layout::{html_escape, page, script_json};

pub fn render_channel_activity(activity: &ChannelActivity) -> Result<String, serde_json::Error> {
    let minute_data = script_json(&activity.minute_data)?;
    let minute_labels = script_json(&activity.minute_labels)?;
    let hour_data = script_json(&activity.hour_data)?;
    let hour_labels = script_json(&activity.hour_labels)?;
    let day_data = script_json(&activity.day_data)?;
    let day_labels = script_json(&activity.day_labels)?;
    let channel_name = script_json(&activity.channel_name)?;

    let head = r#"<script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>"#;

    let body = format!(
        r#"<h1>Activity of {title}</h1>
<h2>Last hour</h2>
<canvas id="minute-chart"></canvas>
<h2>Last day</h2>
<canvas id="hour-chart"></canvas>
<h2>Last month</h2>
<canvas id="day-chart"></canvas>
<script>
const channelName = {channel_name};
const minuteData = {minute_data};
const minuteLabels = {minute_labels};
const hourData = {hour_data};
const hourLabels = {hour_labels};
const dayData = {day_data};
const dayLabels = {day_labels};

const drawChart = (id, labels, data, label) => new Chart(document.getElementById(id), {{
    type: "line",
    data: {{ labels, datasets: [{{ label, data, fill: true }}] }},
    options: {{ scales: {{ y: {{ beginAtZero: true }} }} }}
}});

drawChart("minute-chart", minuteLabels, minuteData, "Messages per minute");
drawChart("hour-chart", hourLabels, hourData, "Messages per hour");
drawChart("day-chart", dayLabels, dayData, "Messages per day");
</script>"#,
        title = html_escape(&activity.channel_name),
    );

    Ok(page(
        &format!("{} - channel activity", activity.channel_name),
        head,
        &body,
    ))
}
