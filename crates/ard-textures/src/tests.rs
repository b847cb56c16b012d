use ard_save_load::prelude::*;

use crate::prelude::*;

const MODES: [WrapMode; 6] = WrapMode::ALL;

#[test]
fn defaults_to_edge_clamp() {
    let state = WrapModeState::new();
    for axis in WrapAxis::ALL {
        assert_eq!(state.wrap(axis), WrapMode::EdgeClamp);
    }

    let texture = Texture3D::new(TextureKind::CubeMap);
    assert_eq!(texture.wrap_state(), &WrapModeState::default());
}

#[test]
fn set_single_axis() {
    for axis in WrapAxis::ALL {
        for mode in MODES {
            let mut state = WrapModeState::uniform(WrapMode::BorderClamp);
            state.set_wrap(axis, mode);
            assert_eq!(state.wrap(axis), mode);

            WrapAxis::ALL
                .into_iter()
                .filter(|other| *other != axis)
                .for_each(|other| assert_eq!(state.wrap(other), WrapMode::BorderClamp));
        }
    }
}

#[test]
fn set_uniform() {
    for mode in MODES {
        let mut state = WrapModeState::new();
        state.set_wrap(WrapAxis::T, WrapMode::MirrorEdgeClamp);
        state.set_wrap_all(mode);
        assert_eq!(state.wrap(WrapAxis::S), mode);
        assert_eq!(state.wrap(WrapAxis::T), mode);
        assert_eq!(state.wrap(WrapAxis::R), mode);
        assert!(state.is_uniform());
    }
}

#[test]
fn per_axis_accessors() {
    let mut state = WrapModeState::new();
    state.set_wrap_s(WrapMode::Repeat);
    state.set_wrap_t(WrapMode::MirroredRepeat);
    state.set_wrap_r(WrapMode::BorderClamp);

    assert_eq!(state.wrap_s(), state.wrap(WrapAxis::S));
    assert_eq!(state.wrap_t(), WrapMode::MirroredRepeat);
    assert_eq!(state.wrap(WrapAxis::R), WrapMode::BorderClamp);
    assert!(!state.is_uniform());
}

#[test]
fn absent_arguments_are_rejected() {
    let mut state = WrapModeState::new();
    state.set_wrap(WrapAxis::S, WrapMode::Repeat);
    let before = state;

    assert!(matches!(
        state.try_set_wrap(Some(WrapAxis::T), None),
        Err(WrapError::InvalidArgument(_))
    ));
    assert!(matches!(
        state.try_set_wrap(None, Some(WrapMode::MirroredRepeat)),
        Err(WrapError::InvalidArgument(_))
    ));
    assert!(matches!(
        state.try_set_wrap_all(None),
        Err(WrapError::InvalidArgument(_))
    ));

    assert_eq!(state, before);
}

#[test]
fn absent_mode_is_reported_before_axis() {
    let mut state = WrapModeState::new();
    assert_eq!(
        state.try_set_wrap(None, None),
        Err(WrapError::InvalidArgument("mode can not be absent".into()))
    );
}

#[test]
fn validating_forms_assign() {
    let mut state = WrapModeState::new();
    state
        .try_set_wrap(Some(WrapAxis::R), Some(WrapMode::Repeat))
        .unwrap();
    assert_eq!(state.try_wrap(Some(WrapAxis::R)), Ok(WrapMode::Repeat));

    state.try_set_wrap_all(Some(WrapMode::MirroredRepeat)).unwrap();
    assert!(state.iter().all(|(_, mode)| mode == WrapMode::MirroredRepeat));
}

#[test]
fn unrecognized_axis_is_rejected() {
    let mut state = WrapModeState::new();
    assert!(matches!(
        state.try_wrap(None),
        Err(WrapError::InvalidArgument(_))
    ));
    assert_eq!(
        state.wrap_raw("W"),
        Err(WrapError::InvalidArgument("invalid wrap axis: W".into()))
    );

    let before = state;
    assert!(state.set_wrap_raw("Q", "Repeat").is_err());
    assert!(state.set_wrap_raw("S", "Sideways").is_err());
    assert_eq!(state, before);

    state.set_wrap_raw("t", "repeat").unwrap();
    assert_eq!(state.wrap_raw("T"), Ok(WrapMode::Repeat));
}

#[test]
fn ordinal_axis_is_rejected() {
    let err: WrapError = WrapAxis::try_from(3u32).unwrap_err().into();
    assert_eq!(err, WrapError::InvalidArgument("invalid wrap axis: 3".into()));
}

#[test]
fn copy_has_no_aliasing() {
    let mut src = WrapModeState::new();
    src.set_wrap(WrapAxis::S, WrapMode::Repeat);
    src.set_wrap(WrapAxis::R, WrapMode::MirroredRepeat);

    let mut dst = WrapModeState::uniform(WrapMode::BorderClamp);
    src.copy_into(&mut dst);
    assert_eq!(dst, src);

    src.set_wrap_all(WrapMode::MirrorBorderClamp);
    assert_eq!(dst.wrap(WrapAxis::S), WrapMode::Repeat);
    assert_eq!(dst.wrap(WrapAxis::T), WrapMode::EdgeClamp);
    assert_eq!(dst.wrap(WrapAxis::R), WrapMode::MirroredRepeat);
}

#[test]
fn texture_simple_clone() {
    let mut src = Texture3D::with_name(TextureKind::ThreeDimensional { depth: 64 }, "smoke");
    src.set_wrap(WrapAxis::S, WrapMode::Repeat);
    src.set_wrap(WrapAxis::T, WrapMode::MirroredRepeat);
    src.base_mut().min_filter = MinFilter::Trilinear;
    src.base_mut().anisotropic_filter = 8;

    let clone = src.simple_clone();
    assert_eq!(clone, src);

    src.set_wrap_all(WrapMode::BorderClamp);
    src.base_mut().name = Some("fog".into());
    assert_eq!(clone.wrap(WrapAxis::S), WrapMode::Repeat);
    assert_eq!(clone.wrap(WrapAxis::T), WrapMode::MirroredRepeat);
    assert_eq!(clone.name(), Some("smoke"));
}

#[test]
fn simple_clone_into_keeps_target_kind() {
    let mut src = Texture3D::with_name(TextureKind::CubeMap, "sky");
    src.set_wrap_all(WrapMode::Repeat);

    let target = Texture3D::new(TextureKind::TwoDimensionalArray { layers: 6 });
    let target = src.simple_clone_into(target);

    assert_eq!(target.kind(), TextureKind::TwoDimensionalArray { layers: 6 });
    assert_eq!(target.wrap_state(), src.wrap_state());
    assert_eq!(target.base(), src.base());
}

fn scenario_state() -> WrapModeState {
    let mut state = WrapModeState::new();
    state.set_wrap(WrapAxis::S, WrapMode::Repeat);
    state.set_wrap(WrapAxis::T, WrapMode::EdgeClamp);
    state.set_wrap(WrapAxis::R, WrapMode::MirroredRepeat);
    state
}

#[test]
fn wrap_state_round_trip() {
    let state = scenario_state();

    let data = save::<Ron, _>(&state).unwrap();
    let loaded = load::<Ron, WrapModeState>(&data).unwrap();
    assert_eq!(
        (loaded.wrap_s(), loaded.wrap_t(), loaded.wrap_r()),
        (WrapMode::Repeat, WrapMode::EdgeClamp, WrapMode::MirroredRepeat)
    );

    let data = save::<Bincode, _>(&state).unwrap();
    assert_eq!(load::<Bincode, WrapModeState>(&data).unwrap(), state);
}

#[test]
fn every_mode_round_trips() {
    for s in MODES {
        for r in MODES {
            let mut state = WrapModeState::uniform(WrapMode::MirrorEdgeClamp);
            state.set_wrap(WrapAxis::S, s);
            state.set_wrap(WrapAxis::R, r);

            let data = save::<Bincode, _>(&state).unwrap();
            assert_eq!(load::<Bincode, WrapModeState>(&data).unwrap(), state);
        }
    }
}

#[test]
fn default_wrap_fields_are_omitted() {
    let record = ard_save_load::saver::to_record::<Ron, _>(&scenario_state()).unwrap();
    let names: Vec<_> = record.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["wrapS", "wrapR"]);
}

#[test]
fn missing_wrap_fields_load_as_edge_clamp() {
    let record = SavedRecord {
        type_name: Texture3D::TYPE_NAME.into(),
        fields: Vec::default(),
    };
    let data = Ron::serialize(&record).unwrap();

    let texture = load::<Ron, Texture3D>(&data).unwrap();
    assert_eq!(texture.wrap_state(), &WrapModeState::uniform(WrapMode::EdgeClamp));
    assert_eq!(texture.kind(), TextureKind::ThreeDimensional { depth: 1 });

    // Loading over an existing texture also resets missing axes.
    let mut texture = Texture3D::new(TextureKind::CubeMap);
    texture.set_wrap_all(WrapMode::Repeat);
    ard_save_load::loader::load_into::<Ron, _>(&mut texture, &data).unwrap();
    assert!(texture.wrap_state().iter().all(|(_, m)| m == WrapMode::EdgeClamp));
}

#[test]
fn bad_wrap_value_surfaces_format_error() {
    let record = SavedRecord {
        type_name: Texture3D::TYPE_NAME.into(),
        fields: vec![SavedField {
            name: "wrapT".into(),
            raw: b"Sideways".to_vec(),
        }],
    };
    let data = Ron::serialize(&record).unwrap();
    assert!(matches!(
        load::<Ron, Texture3D>(&data),
        Err(LoadError::Format(_))
    ));
}

#[test]
fn texture_round_trip() {
    let mut texture = Texture3D::with_name(TextureKind::TwoDimensionalArray { layers: 12 }, "noise");
    texture.base_mut().mag_filter = MagFilter::Nearest;
    texture.base_mut().shadow_compare = ShadowCompareMode::LessOrEqual;
    *texture.wrap_state_mut() = scenario_state();

    let data = save::<Ron, _>(&texture).unwrap();
    assert_eq!(load::<Ron, Texture3D>(&data).unwrap(), texture);

    let data = save::<Bincode, _>(&texture).unwrap();
    assert_eq!(load::<Bincode, Texture3D>(&data).unwrap(), texture);
}

#[test]
fn base_fields_precede_wrap_fields() {
    let mut texture = Texture3D::with_name(TextureKind::ThreeDimensional { depth: 8 }, "cloud");
    texture.set_wrap(WrapAxis::T, WrapMode::Repeat);

    let record = ard_save_load::saver::to_record::<Bincode, _>(&texture).unwrap();
    let names: Vec<_> = record.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["name", "kind", "wrapT"]);
}

#[test]
fn wrap_state_from_ron_settings() {
    let state: WrapModeState =
        ron::from_str("(wrap_s: Repeat, wrap_t: EdgeClamp, wrap_r: MirroredRepeat)").unwrap();
    assert_eq!(state, scenario_state());
}

#[test]
fn failed_load_leaves_texture_untouched() {
    let mut texture = Texture3D::with_name(TextureKind::CubeMap, "keep");
    texture.set_wrap_all(WrapMode::Repeat);
    let before = texture.clone();

    let record = SavedRecord {
        type_name: Texture3D::TYPE_NAME.into(),
        fields: vec![
            SavedField {
                name: "wrapS".into(),
                raw: b"BorderClamp".to_vec(),
            },
            SavedField {
                name: "wrapT".into(),
                raw: b"Sideways".to_vec(),
            },
        ],
    };
    let data = Ron::serialize(&record).unwrap();

    let res = ard_save_load::loader::load_into::<Ron, _>(&mut texture, &data);
    assert!(matches!(res, Err(LoadError::Format(_))));
    assert_eq!(texture, before);
}

#[test]
fn volume_texture_survives_ron_text() {
    let mut texture = Texture3D::with_name(TextureKind::ThreeDimensional { depth: 16 }, "density");
    *texture.wrap_state_mut() = scenario_state();

    let data = save::<Ron, _>(&texture).unwrap();

    // Records stay readable as text.
    let text = String::from_utf8(data.clone()).unwrap();
    assert!(text.contains("Texture3D"));
    assert!(text.contains("wrapS"));
    assert!(!text.contains("wrapT"));

    let loaded = load::<Ron, Texture3D>(&data).unwrap();
    assert_eq!(
        loaded.wrap_state().iter().map(|(_, m)| m).collect::<Vec<_>>(),
        [WrapMode::Repeat, WrapMode::EdgeClamp, WrapMode::MirroredRepeat]
    );
    assert_eq!(loaded, texture);
}

#[test]
fn record_written_before_wrap_fields_existed() {
    // A record from a writer that only knew the base fields.
    let record: SavedRecord = ron::from_str(
        r#"(type_name: "Texture3D", fields: [(name: "anisotropicFilter", raw: [52])])"#,
    )
    .unwrap();

    let data = Ron::serialize(&record).unwrap();
    let texture = load::<Ron, Texture3D>(&data).unwrap();

    assert_eq!(texture.base().anisotropic_filter, 4);
    assert!(texture.wrap_state().is_uniform());
    assert_eq!(texture.wrap(WrapAxis::R), WrapMode::EdgeClamp);
}
