//! Tests for the event loop and the timed success banner.

use std::time::Duration;

use contact_form::{
    BannerTimerPolicy, FieldId, FormConfig, FormEvent, FormInput, FormRuntime, FormSnapshot,
    RecordingRenderer,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

fn valid_snapshot() -> FormSnapshot {
    FormSnapshot::new()
        .with(FieldId::Name, "Alice")
        .with(FieldId::Email, "alice@example.com")
        .with(FieldId::Subject, "Hello")
        .with(FieldId::Message, "I would like to know more.")
}

/// Spawn a runtime whose renderer forwards every event to a channel.
fn spawn_runtime(
    config: FormConfig,
) -> (
    mpsc::Sender<FormInput>,
    mpsc::UnboundedReceiver<FormEvent>,
    JoinHandle<()>,
) {
    let (input_tx, input_rx) = mpsc::channel(16);
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let handle = tokio::spawn(async move {
        let mut runtime = FormRuntime::new(config);
        let mut renderer = move |event: &FormEvent| {
            let _ = event_tx.send(event.clone());
        };
        runtime.run(input_rx, &mut renderer).await;
    });

    (input_tx, event_rx, handle)
}

#[tokio::test(start_paused = true)]
async fn test_banner_hides_after_five_seconds() {
    let (tx, mut events, handle) = spawn_runtime(FormConfig::default());
    let start = Instant::now();

    tx.send(FormInput::Submit {
        values: valid_snapshot(),
    })
    .await
    .unwrap();

    assert_eq!(events.recv().await, Some(FormEvent::FieldsReset));
    assert_eq!(events.recv().await, Some(FormEvent::BannerShown));

    tokio::time::sleep(Duration::from_millis(4_900)).await;
    assert!(events.try_recv().is_err());

    assert_eq!(events.recv().await, Some(FormEvent::BannerHidden));
    assert!(start.elapsed() >= Duration::from_secs(5));

    drop(tx);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_invalid_submit_shows_only_failing_field() {
    let (tx, mut events, handle) = spawn_runtime(FormConfig::default());

    tx.send(FormInput::Submit {
        values: valid_snapshot().with(FieldId::Message, ""),
    })
    .await
    .unwrap();
    drop(tx);
    handle.await.unwrap();

    let mut received = Vec::new();
    while let Ok(event) = events.try_recv() {
        received.push(event);
    }
    assert_eq!(
        received,
        vec![FormEvent::ErrorShown {
            field: FieldId::Message,
            message: "Message is required".to_string(),
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn test_blur_then_submit_current() {
    let (tx, mut events, handle) = spawn_runtime(FormConfig::default());

    tx.send(FormInput::Blur {
        field: FieldId::Name,
        value: "A".to_string(),
    })
    .await
    .unwrap();
    assert_eq!(
        events.recv().await,
        Some(FormEvent::ErrorShown {
            field: FieldId::Name,
            message: "Name must be at least 2 characters".to_string(),
        })
    );

    for (field, value) in [
        (FieldId::Name, "Alice"),
        (FieldId::Email, "alice@example.com"),
        (FieldId::Subject, "Hello"),
        (FieldId::Message, "I would like to know more."),
    ] {
        tx.send(FormInput::Edit {
            field,
            value: value.to_string(),
        })
        .await
        .unwrap();
    }
    tx.send(FormInput::SubmitCurrent).await.unwrap();

    assert_eq!(
        events.recv().await,
        Some(FormEvent::ErrorCleared {
            field: FieldId::Name
        })
    );
    assert_eq!(events.recv().await, Some(FormEvent::FieldsReset));
    assert_eq!(events.recv().await, Some(FormEvent::BannerShown));

    drop(tx);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_independent_timers_hide_early() {
    let (tx, mut events, handle) = spawn_runtime(FormConfig::default());
    let start = Instant::now();

    tx.send(FormInput::Submit {
        values: valid_snapshot(),
    })
    .await
    .unwrap();
    assert_eq!(events.recv().await, Some(FormEvent::FieldsReset));
    assert_eq!(events.recv().await, Some(FormEvent::BannerShown));

    tokio::time::sleep(Duration::from_secs(3)).await;
    tx.send(FormInput::Submit {
        values: valid_snapshot(),
    })
    .await
    .unwrap();
    assert_eq!(events.recv().await, Some(FormEvent::BannerHidden));
    assert_eq!(events.recv().await, Some(FormEvent::FieldsReset));
    assert_eq!(events.recv().await, Some(FormEvent::BannerShown));

    // The first success's timer still fires at t=5.
    assert_eq!(events.recv().await, Some(FormEvent::BannerHidden));
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(5));
    assert!(elapsed < Duration::from_secs(8));

    drop(tx);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_restart_policy_extends_banner() {
    let config = FormConfig::default().with_banner_timer(BannerTimerPolicy::Restart);
    let (tx, mut events, handle) = spawn_runtime(config);
    let start = Instant::now();

    tx.send(FormInput::Submit {
        values: valid_snapshot(),
    })
    .await
    .unwrap();
    assert_eq!(events.recv().await, Some(FormEvent::FieldsReset));
    assert_eq!(events.recv().await, Some(FormEvent::BannerShown));

    tokio::time::sleep(Duration::from_secs(3)).await;
    tx.send(FormInput::Submit {
        values: valid_snapshot(),
    })
    .await
    .unwrap();
    assert_eq!(events.recv().await, Some(FormEvent::BannerHidden));
    assert_eq!(events.recv().await, Some(FormEvent::FieldsReset));
    assert_eq!(events.recv().await, Some(FormEvent::BannerShown));

    assert_eq!(events.recv().await, Some(FormEvent::BannerHidden));
    assert!(start.elapsed() >= Duration::from_secs(8));

    drop(tx);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_run_returns_when_input_closes() {
    let (tx, rx) = mpsc::channel(16);
    tx.send(FormInput::Blur {
        field: FieldId::Phone,
        value: "0123".to_string(),
    })
    .await
    .unwrap();
    tx.send(FormInput::Blur {
        field: FieldId::Phone,
        value: "".to_string(),
    })
    .await
    .unwrap();
    drop(tx);

    let mut runtime = FormRuntime::default();
    let mut recorder = RecordingRenderer::new();
    runtime.run(rx, &mut recorder).await;

    assert_eq!(
        recorder.take(),
        vec![
            FormEvent::ErrorShown {
                field: FieldId::Phone,
                message: "Please enter a valid phone number".to_string(),
            },
            FormEvent::ErrorCleared {
                field: FieldId::Phone
            },
        ]
    );
    assert!(recorder.events().is_empty());
    assert!(!runtime.validator().field(FieldId::Phone).shows_error());
}

#[test]
fn test_input_json_shape() {
    let input: FormInput =
        serde_json::from_str(r#"{"input": "blur", "field": "email", "value": "bob@"}"#).unwrap();
    assert_eq!(
        input,
        FormInput::Blur {
            field: FieldId::Email,
            value: "bob@".to_string(),
        }
    );

    let submit: FormInput =
        serde_json::from_str(r#"{"input": "submit", "values": {"name": "Al"}}"#).unwrap();
    let FormInput::Submit { values } = submit else {
        panic!("expected submit");
    };
    assert_eq!(values.get(FieldId::Name), "Al");

    let event = serde_json::to_value(FormEvent::ErrorCleared {
        field: FieldId::Phone,
    })
    .unwrap();
    assert_eq!(
        event,
        serde_json::json!({"event": "error_cleared", "field": "phone"})
    );
}
