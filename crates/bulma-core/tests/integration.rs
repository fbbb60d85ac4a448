use bulma_core::choice::{flag_names, parse_flags, toggle_flag};
use bulma_core::duration::DurationUnit;
use bulma_core::http_error::{ErrorPage, ErrorReport, HttpFailure};
use bulma_core::registry::{TabInfo, tab_class};
use bulma_core::{
    Autocomplete, BreadcrumbTrail, BulmaSettings, DateTimeInput, DateTimeKind, DurationInput, DurationKind,
    FieldError, InputAutocompleteOptions, InputDateTimeOptions, InputDurationOptions, InputStatus, Selection,
    TabRegistry, ThemeMode,
};
use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use serde_json::json;

fn now() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, 8)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .expect("valid timestamp")
}

#[test]
fn settings_drive_widget_steps() {
    let settings = BulmaSettings::from_value(json!({
        "duration": { "minutes": 10 },
        "datetime": { "start_of_week": "Mon", "year_range": 3 },
        "theme": { "load_user_preference": false }
    }))
    .expect("settings should load");

    let mut duration = DurationInput::new(
        "Timeout",
        DurationKind::Span,
        false,
        InputDurationOptions::default(),
        None,
    )
    .with_steps(settings.duration);
    duration.open_popout();
    duration.step(DurationUnit::Minutes, true);
    assert_eq!(duration.popout_value(), TimeDelta::minutes(10));
    assert_eq!(duration.value(), Some(TimeDelta::minutes(10)));

    let mut picker = DateTimeInput::new(
        "Due",
        DateTimeKind::Date,
        true,
        InputDateTimeOptions::default(),
        None,
        now(),
    )
    .with_steps(settings.datetime);
    picker.open_popout();
    let grid = picker.calendar_dates();
    assert_eq!(grid.len(), 42);
    assert_eq!(grid[0].weekday(), Weekday::Mon);
    assert_eq!(grid[0], NaiveDate::from_ymd_opt(2024, 1, 29).expect("date"));
    assert_eq!(picker.calendar_years().len(), 7);

    let decision = settings.theme.resolve_initial(false, Some("true"));
    assert_eq!(decision.mode, ThemeMode::Light);
}

#[test]
fn duration_text_flows_through_status_colors() {
    let mut input = DurationInput::new(
        "Timeout",
        DurationKind::Span,
        true,
        InputDurationOptions::default(),
        None,
    );
    input.on_change("1:30").expect("hours and minutes parse");
    assert_eq!(input.value(), Some(TimeDelta::minutes(90)));
    assert!(input.status().contains(InputStatus::BACKGROUND_SUCCESS));

    let err = input.on_change("1x").expect_err("letters are rejected");
    assert!(matches!(err, FieldError::InvalidDurationCharacters { .. }));
    assert!(input.status().contains(InputStatus::BACKGROUND_DANGER));
    assert_eq!(input.value(), Some(TimeDelta::minutes(90)));
    assert_eq!(
        input.error().map(ToString::to_string).as_deref(),
        Some("The Timeout field must contain only digits, '-', '.', and ':'.")
    );

    input.on_change("").expect("blank clears a nullable field");
    assert_eq!(input.value(), None);
}

#[test]
fn date_picker_selects_from_popout() {
    let mut picker = DateTimeInput::new(
        "Due",
        DateTimeKind::Date,
        true,
        InputDateTimeOptions::default(),
        None,
        now(),
    );
    picker.on_change("2024-03-31").expect("iso date parses");
    assert_eq!(picker.text(), "03/31/2024");

    picker.open_popout();
    picker.select_month(2);
    assert_eq!(picker.popout_value().date(), NaiveDate::from_ymd_opt(2024, 2, 29).expect("leap day"));

    let target = NaiveDate::from_ymd_opt(2024, 2, 14).expect("date");
    picker.select_date(target);
    assert!(!picker.is_popout_open());
    assert_eq!(picker.date(), Some(target));
}

#[test]
fn autocomplete_keyboard_selection() {
    let mut input = Autocomplete::new("City", InputAutocompleteOptions::default(), |city: &String| city.clone());
    input.set_items(vec!["Berlin".to_string(), "Paris".to_string(), "Rome".to_string()]);

    input.on_focus();
    assert!(input.is_popout_open());
    assert!(input.on_key_down("ArrowUp"));
    assert_eq!(input.highlighted().map(String::as_str), Some("Rome"));
    assert!(input.on_key_down("ArrowDown"));
    assert_eq!(input.highlighted().map(String::as_str), Some("Berlin"));

    input.on_key_up("Enter");
    assert_eq!(input.selected().map(String::as_str), Some("Berlin"));
    assert!(!input.is_popout_open());

    assert!(input.set_text("Lisbon").is_err());
    assert!(input.set_text("paris").is_ok());
    assert_eq!(input.selected().map(String::as_str), Some("Paris"));
}

#[test]
fn tab_registry_lifecycle() {
    let mut tabs = TabRegistry::new("Tabs", None);
    tabs.add(Some("general"), TabInfo::default()).expect("first tab");
    tabs.add(
        Some("advanced"),
        TabInfo {
            icon: Some("tune".into()),
            enabled: true,
        },
    )
    .expect("second tab");
    tabs.add(
        Some("danger"),
        TabInfo {
            icon: None,
            enabled: false,
        },
    )
    .expect("third tab");
    assert!(tabs.add(Some("general"), TabInfo::default()).is_err());
    assert!(tabs.add(Some("  "), TabInfo::default()).is_err());

    assert_eq!(tabs.active(), Some("general"));
    assert_eq!(tabs.select("danger", |info| info.enabled), Selection::Ignored);
    assert_eq!(
        tabs.select("advanced", |info| info.enabled),
        Selection::Changed("advanced".into())
    );

    tabs.remove("advanced").expect("registered");
    assert_eq!(tabs.active(), Some("general"));
    let indexes: Vec<usize> = tabs.entries().iter().map(|entry| entry.index).collect();
    assert_eq!(indexes, vec![0, 1]);
    assert_eq!(tab_class(1, tabs.len(), false), "ml-1");
}

#[test]
fn breadcrumb_last_item_tracks_removal() {
    let mut trail = BreadcrumbTrail::new();
    trail.add("home", "Home", "/", Some("home".into()));
    trail.add("docs", "Docs", "/docs", None);
    trail.add("page", "Page", "/docs/page", None);
    assert!(trail.is_last("page"));

    trail.remove("page").expect("present");
    assert!(trail.is_last("docs"));
    assert_eq!(trail.entries()[1].index, 1);
    assert!(trail.remove("missing").is_err());
}

#[test]
fn flag_values_round_trip_through_text() {
    let options: InputDurationOptions = parse_flags("SHOW_HOURS | show_minutes", "Options").expect("known flags");
    assert_eq!(
        options,
        InputDurationOptions::SHOW_HOURS | InputDurationOptions::SHOW_MINUTES
    );
    let toggled = toggle_flag(options, InputDurationOptions::SHOW_MINUTES);
    assert_eq!(flag_names(&toggled), "SHOW_HOURS");
    assert!(parse_flags::<InputDurationOptions>("SHOW_WEEKS", "Options").is_err());
}

#[test]
fn error_boundary_maps_failures_to_pages() {
    let failure = HttpFailure {
        status: 404,
        message: "no such user".into(),
    };
    let report = ErrorReport::from_error(&failure);
    assert_eq!(report.status, Some(404));
    assert_eq!(report.page().title, "Not Found");
    assert_eq!(ErrorPage::for_status(Some(999)).title, "Unknown");
}
