use weather_now_core::{SubmitOutcome, WeatherSnapshot, WeatherView, render_panel};

pub fn print_panel(snapshot: Option<&WeatherSnapshot>) {
    println!("{}", render_panel(snapshot));
}

pub fn print_json(snapshot: &WeatherSnapshot) -> anyhow::Result<()> {
    let view = WeatherView::from_snapshot(snapshot);
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

/// One line of feedback for a lookup that failed remotely.
pub fn failure_line(outcome: &SubmitOutcome) -> Option<String> {
    match outcome {
        SubmitOutcome::Updated => None,
        SubmitOutcome::Failed(err) => Some(format!("Could not fetch weather: {err}")),
    }
}

pub fn print_suggestions(suggestions: &[&str]) {
    for s in suggestions {
        println!("{s}");
    }
}
