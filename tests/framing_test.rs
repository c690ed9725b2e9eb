use autoframe_rs::framing::TrackingSpeed;
use autoframe_rs::{
    FaceLocator, FaceObservation, FramingController, FramingPipeline, MotionSmoother, Rect,
    TrackingConfig, TrackingPhase, ZoomLevel,
};

fn face_at(cx: f32, cy: f32) -> Rect {
    Rect::centered_on(cx, cy, 0.1, 0.16)
}

#[test]
fn test_startup_tick_has_no_transient() {
    let mut smoother = MotionSmoother::new(TrackingSpeed::Slow.params());
    let first_target = Rect::new(0.4, 0.25, 0.2, 0.3);
    assert_eq!(smoother.tick(first_target), first_target);
}

#[test]
fn test_target_jump_is_velocity_limited_and_converges() {
    // Slow speed, medium zoom. The target crop sits at (0.3, 0.3) for
    // ten ticks, then jumps 0.3 to the right.
    let params = TrackingSpeed::Slow.params();
    let mut smoother = MotionSmoother::new(params);

    let before = Rect::new(0.3, 0.3, 0.2, 0.2);
    let mut out = Rect::default();
    for _ in 0..10 {
        out = smoother.tick(before);
    }
    let tick10 = out;
    assert_eq!(tick10, before);

    let after = Rect::new(0.6, 0.3, 0.2, 0.2);

    // Tick 11: displacement at most the slow-speed velocity cap.
    let tick11 = smoother.tick(after);
    let step = tick11.max_component_delta(&tick10);
    assert!(step > 0.0, "output must start moving");
    assert!(step <= params.max_velocity + 1e-6, "step {step} over cap");

    // Within 1% of the new target inside 30 ticks of the jump.
    let mut converged_at = None;
    let mut prev = tick11;
    for tick in 1..30 {
        let next = smoother.tick(after);
        assert!(
            next.max_component_delta(&prev) <= params.max_velocity + 1e-6,
            "cap violated at tick {tick}"
        );
        assert!(next.is_in_frame());
        prev = next;
        if next.max_component_delta(&after) <= 0.01 {
            converged_at = Some(tick);
            break;
        }
    }
    assert!(
        converged_at.is_some(),
        "did not reach within 1% of target in 30 ticks, gap {}",
        prev.max_component_delta(&after)
    );
}

#[test]
fn test_long_detection_loss_holds_position() {
    let mut controller = FramingController::new(TrackingConfig::default(), 1.0).unwrap();

    // Converge on a face.
    let mut crop = Rect::default();
    for _ in 0..40 {
        crop = controller.tick(Some(face_at(0.4, 0.5)));
    }
    let settled = crop;

    // 60 lost ticks: framing must not drift toward a default crop.
    for tick in 0..60 {
        let held = controller.tick(None);
        assert_eq!(held, settled, "drifted at lost tick {tick}");
    }
    assert!(matches!(
        controller.phase(),
        TrackingPhase::Holding { lost_ticks: 60 }
    ));
}

#[test]
fn test_no_snap_across_loss_gap() {
    let params = TrackingSpeed::Slow.params();
    let mut controller = FramingController::new(TrackingConfig::default(), 1.0).unwrap();

    let mut prev = controller.tick(Some(face_at(0.25, 0.5)));
    for _ in 0..20 {
        prev = controller.tick(Some(face_at(0.25, 0.5)));
    }

    // Gap of 15 ticks, then the face reappears on the far side.
    for _ in 0..15 {
        prev = controller.tick(None);
    }
    for tick in 0..80 {
        let next = controller.tick(Some(face_at(0.75, 0.5)));
        assert!(
            next.max_component_delta(&prev) <= params.max_velocity + 1e-6,
            "snap at tick {tick} after gap"
        );
        assert!(next.is_in_frame());
        prev = next;
    }

    // It did get there in the end.
    let (cx, _) = prev.center();
    assert!((cx - 0.75).abs() < 0.01);
}

struct ScriptedLocator {
    frames: Vec<Vec<FaceObservation>>,
    cursor: usize,
}

impl FaceLocator for ScriptedLocator {
    type Error = std::convert::Infallible;

    fn locate(
        &mut self,
        _input: &[u8],
        _width: u32,
        _height: u32,
    ) -> Result<Vec<FaceObservation>, Self::Error> {
        let observations = self
            .frames
            .get(self.cursor)
            .cloned()
            .unwrap_or_default();
        self.cursor += 1;
        Ok(observations)
    }
}

#[test]
fn test_pipeline_end_to_end() {
    // Three frames with a face, two without, three with it moved.
    let seen = vec![FaceObservation::new(face_at(0.4, 0.5), 0.9)];
    let moved = vec![FaceObservation::new(face_at(0.6, 0.5), 0.85)];
    let frames = vec![
        seen.clone(),
        seen.clone(),
        seen.clone(),
        vec![],
        vec![],
        moved.clone(),
        moved.clone(),
        moved.clone(),
    ];

    let locator = ScriptedLocator { frames, cursor: 0 };
    let mut pipeline = FramingPipeline::with_default_config(locator);
    let cap = TrackingSpeed::Slow.params().max_velocity;

    let mut prev: Option<Rect> = None;
    for frame in 0..8 {
        let crop = pipeline.process_frame(&[], 1280, 720).unwrap();
        assert!(crop.is_in_frame(), "out of bounds at frame {frame}");
        if let Some(prev) = prev {
            assert!(
                crop.max_component_delta(&prev) <= cap + 1e-6,
                "cap violated at frame {frame}"
            );
        }
        prev = Some(crop);
    }
    assert!(pipeline.controller().phase().is_tracking());
}

#[test]
fn test_runtime_config_swap_keeps_motion_bounded() {
    let seen = vec![FaceObservation::new(face_at(0.5, 0.5), 0.9)];
    let locator = ScriptedLocator {
        frames: vec![seen; 40],
        cursor: 0,
    };
    let mut pipeline = FramingPipeline::with_default_config(locator);

    let mut prev = pipeline.process_frame(&[], 1280, 720).unwrap();

    // Control surface stages a tighter, faster config mid-session.
    pipeline
        .config_slot()
        .submit(TrackingConfig {
            speed: TrackingSpeed::Fast,
            zoom: ZoomLevel::Close,
            face_size_override: None,
        })
        .unwrap();

    let cap = TrackingSpeed::Fast.params().max_velocity;
    for _ in 0..39 {
        let crop = pipeline.process_frame(&[], 1280, 720).unwrap();
        assert!(crop.max_component_delta(&prev) <= cap + 1e-6);
        prev = crop;
    }

    // Converged on the close-zoom framing: face height 0.16 at 50%.
    assert!((prev.height - 0.32).abs() < 0.01);
}

#[test]
fn test_config_json_round_trip() {
    let config = TrackingConfig {
        speed: TrackingSpeed::Fast,
        zoom: ZoomLevel::Wide,
        face_size_override: Some(0.35),
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"fast\""));
    assert!(json.contains("\"wide\""));
    let back: TrackingConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    // The settings strings the external surfaces persist.
    let parsed: TrackingConfig =
        serde_json::from_str(r#"{"speed":"slow","zoom":"medium"}"#).unwrap();
    assert_eq!(parsed, TrackingConfig::default());
}
