#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for start-up: data directory, settings.json and first frame.

use std::fs;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use dict_tui::backend::{resolve_data_path, ConfigService, LocalConfigService, SETTINGS_FILE};
use dict_tui::i18n::Language;
use dict_tui::model::{App, LanguagePair, PanelId, Theme, WidgetId};
use dict_tui::update::dispatch;
use dict_tui::view;
use dict_tui::DictError;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn screen(app: &App) -> String {
    let backend = TestBackend::new(70, 24);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal
        .draw(|frame| view::render(app, frame))
        .expect("failed to draw");
    let buf: &Buffer = terminal.backend().buffer();
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_data_path_is_created() {
    let tmp = tempfile::tempdir().unwrap();
    let nested = tmp.path().join("a").join("b");
    let path = resolve_data_path(Some(nested.clone())).unwrap();
    assert_eq!(path, nested);
    assert!(nested.is_dir());
}

#[test]
fn test_settings_drive_initial_app() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join(SETTINGS_FILE),
        r#"{
            "theme": "light",
            "locale": "zh-CN",
            "translate_pair": { "source": "dk", "target": "pt_br" }
        }"#,
    )
    .unwrap();

    let config = LocalConfigService::new(tmp.path()).load().unwrap();
    let mut app = App::from_config(&config);

    assert_eq!(app.theme(), Theme::Light);
    assert_eq!(app.language(), Language::ZhCn);
    assert_eq!(app.selected_panel(), PanelId::Meaning);
    assert_eq!(app.focus(), Some(WidgetId::MeaningInput));

    dispatch(
        &mut app,
        Event::Key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE)),
    );
    assert_eq!(app.focus(), Some(WidgetId::TranslateInput));
    assert_eq!(
        app.dictionary(PanelId::Translate),
        Some(&LanguagePair::new("dk", "pt_br"))
    );
    assert!(screen(&app).contains("[dk>pt_br|zh-CN]"));
}

#[test]
fn test_invalid_settings_is_a_parse_error() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join(SETTINGS_FILE), "{ not json").unwrap();

    let err = LocalConfigService::new(tmp.path()).load().unwrap_err();
    assert!(matches!(err, DictError::ConfigParse { .. }));
}

#[test]
fn test_first_frame_with_defaults() {
    let app = App::new();
    let text = screen(&app);
    assert!(text.contains("[1] Meaning"));
    assert!(text.contains("Word:"));
    assert!(text.contains("Dictionary: en -> en"));
    assert!(text.contains("[en>en|en-US]"));
}

#[test]
fn test_meaning_word_prefills_focused_input() {
    let mut app = App::new();
    app.set_meaning_word("saudade");
    assert_eq!(app.widgets().meaning_input.value(), "saudade");
    assert_eq!(app.focus(), Some(WidgetId::MeaningInput));
    assert!(screen(&app).contains("Word: saudade"));

    // 光标在末尾，继续输入会追加
    dispatch(
        &mut app,
        Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE)),
    );
    assert_eq!(app.widgets().meaning_input.value(), "saudades");
}
