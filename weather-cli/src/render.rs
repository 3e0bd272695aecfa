use weather_core::{LookupStatus, WidgetView};

/// Plain-text rendering of the widget view.
pub fn render(view: &WidgetView) -> String {
    match (&view.status, &view.messages) {
        (LookupStatus::Idle, _) => String::new(),
        (LookupStatus::Loading, _) => "Loading...".to_string(),
        (LookupStatus::Failed(kind), _) => format!("Error: {kind}"),
        (LookupStatus::Succeeded(_), Some(messages)) => format!(
            "Temperature: {}\nConditions:  {}\nLocation:    {}",
            messages.temperature, messages.condition, messages.location_time
        ),
        (LookupStatus::Succeeded(snapshot), None) => snapshot.location_name.clone(),
    }
}
