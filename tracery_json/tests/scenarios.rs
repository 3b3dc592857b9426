// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end recording scenarios, checked through the JSON Lines encoding.

use std::f64::consts::FRAC_PI_2;

use kurbo::{Affine, Point, Rect};
use peniko::Color;
use tracery_record::{GraphicsContext, PathDrawMode, RecordError};

#[test]
fn triangle_fill_round_trips_through_the_encoding() {
    let mut gc = GraphicsContext::new(100, 100);
    gc.move_to(0.0, 0.0);
    gc.line_to(10.0, 0.0);
    gc.line_to(10.0, 10.0);
    gc.close_path();
    assert_eq!(gc.get_path_current_point(), Point::new(0.0, 0.0));
    assert_eq!(gc.get_path_bounding_box(), Rect::new(0.0, 0.0, 10.0, 10.0));
    gc.fill_path();

    let document = tracery_json::context_lines(&gc).expect("log encodes");
    let lines: Vec<&str> = document.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "{\"op\":\"dfpt\",\"id\":[0,0],\"ops\":[\
         {\"op\":\"mvto\",\"pnt\":[0.0,0.0]},\
         {\"op\":\"lnto\",\"to\":[10.0,0.0]},\
         {\"op\":\"lnto\",\"to\":[10.0,10.0]},\
         {\"op\":\"lnto\",\"to\":[0.0,0.0]}]}"
    );
    assert_eq!(lines[1], "{\"op\":\"fpth\",\"pth\":[0,0]}");
}

#[test]
fn counterclockwise_quarter_arc_tracks_endpoint_and_extent() {
    let mut gc = GraphicsContext::new(100, 100);
    gc.arc(0.0, 0.0, 5.0, 0.0, FRAC_PI_2, false)
        .expect("angles are in range");
    let current = gc.get_path_current_point();
    assert!((current.x).abs() < 1e-9);
    assert!((current.y - 5.0).abs() < 1e-9);
    let bounds = gc.get_path_bounding_box();
    assert!(bounds.contains(Point::new(5.0, 0.0)));
    assert!(bounds.contains(Point::new(0.0, 5.0)));

    gc.stroke_path();
    let document = tracery_json::context_lines(&gc).expect("log encodes");
    assert!(document.contains("\"op\":\"arc-\""));
    assert!(document.contains("\"clock\":false"));
}

#[test]
fn nested_save_restore_encodes_four_records_and_restores_the_ctm() {
    let mut gc = GraphicsContext::new(100, 100);
    let initial = gc.get_ctm();
    gc.save_state();
    gc.save_state();
    gc.restore_state().expect("two saves are on the stack");
    gc.restore_state().expect("one save is on the stack");
    assert_eq!(gc.get_ctm(), initial);

    let document = tracery_json::context_lines(&gc).expect("log encodes");
    let lines: Vec<&str> = document.lines().collect();
    assert_eq!(
        lines,
        [
            "{\"op\":\"push\"}",
            "{\"op\":\"push\"}",
            "{\"op\":\"pop-\"}",
            "{\"op\":\"pop-\"}",
        ]
    );
}

#[test]
fn identical_call_sequences_encode_byte_identically() {
    let build = || {
        let mut gc = GraphicsContext::new(640, 480);
        gc.set_fill_color(Color::from_rgba8(200, 100, 50, 255));
        gc.translate_ctm(10.0, 10.0);
        gc.save_state();
        gc.rotate_ctm(0.3);
        gc.rect(0.0, 0.0, 20.0, 20.0);
        gc.draw_path(PathDrawMode::FillStroke);
        gc.restore_state().expect("one save is on the stack");
        let mut marker = gc.get_empty_path();
        marker.arc(0.0, 0.0, 2.0, 0.0, FRAC_PI_2, false)
            .expect("angles are in range");
        gc.draw_path_at_points(
            &[Point::new(5.0, 5.0), Point::new(15.0, 15.0)],
            &mut marker,
            PathDrawMode::Stroke,
        );
        gc.show_text("done", None);
        tracery_json::context_lines(&gc).expect("log encodes")
    };
    assert_eq!(build(), build());
}

#[test]
fn embedded_fragments_are_defined_before_the_paths_that_use_them() {
    let mut gc = GraphicsContext::new(100, 100);
    let mut fragment = gc.get_empty_path();
    fragment.move_to(0.0, 0.0);
    fragment.line_to(1.0, 1.0);
    gc.move_to(50.0, 50.0);
    gc.add_path(&mut fragment);
    gc.eof_fill_path();

    let document = tracery_json::context_lines(&gc).expect("log encodes");
    let lines: Vec<&str> = document.lines().collect();
    assert_eq!(lines.len(), 3);
    let fragment_def = lines
        .iter()
        .position(|line| line.contains("\"id\":[1,0]"))
        .expect("fragment definition is present");
    let outer_def = lines
        .iter()
        .position(|line| line.contains("\"op\":\"apth\""))
        .expect("embedding definition is present");
    assert!(fragment_def < outer_def);
    assert_eq!(lines[2], "{\"op\":\"efpt\",\"pth\":[0,0]}");
}

#[test]
fn mutating_a_painted_path_mints_a_new_version_in_the_log() {
    let mut gc = GraphicsContext::new(100, 100);
    let mut marker = gc.get_empty_path();
    marker.rect(0.0, 0.0, 1.0, 1.0);
    gc.draw_path_at_points(&[Point::new(0.0, 0.0)], &mut marker, PathDrawMode::Fill);
    marker.rect(2.0, 2.0, 1.0, 1.0);
    gc.draw_path_at_points(&[Point::new(9.0, 9.0)], &mut marker, PathDrawMode::Fill);

    let document = tracery_json::context_lines(&gc).expect("log encodes");
    assert!(document.contains("\"id\":[1,0]"));
    assert!(document.contains("\"id\":[1,1]"));
    assert!(document.contains("\"pth\":[1,0]"));
    assert!(document.contains("\"pth\":[1,1]"));
}

#[test]
fn a_full_drawing_session_encodes_in_call_order() {
    let mut gc = GraphicsContext::new(800, 600);
    gc.begin_page();
    gc.clear(Color::WHITE);
    gc.set_stroke_color(Color::from_rgba8(0, 0, 255, 255));
    gc.set_line_width(2.0);
    gc.clip_to_rect([0.0, 0.0, 400.0, 300.0]);
    gc.concat_ctm(Affine::scale(2.0));
    gc.move_to(10.0, 10.0);
    gc.curve_to(20.0, 0.0, 30.0, 20.0, 40.0, 10.0);
    gc.stroke_path();
    gc.set_text_position(5.0, 5.0);
    gc.show_text("label", None);
    gc.end_page();

    let document = tracery_json::context_lines(&gc).expect("log encodes");
    let opcodes: Vec<String> = document
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).expect("line is JSON");
            value["op"].as_str().expect("records are tagged").to_string()
        })
        .collect();
    assert_eq!(
        opcodes,
        [
            "dfpt", "bpge", "clr-", "sscr", "stlw", "clrt", "cmtx", "spth", "stps", "shtx",
            "epge",
        ]
    );
}

#[test]
fn write_context_streams_the_same_bytes() {
    let mut gc = GraphicsContext::new(10, 10);
    gc.fill_rect([0.0, 0.0, 5.0, 5.0]);
    let document = tracery_json::context_lines(&gc).expect("log encodes");
    let mut sink = Vec::new();
    tracery_json::write_context(&mut sink, &gc).expect("log writes");
    assert_eq!(sink, document.as_bytes());
}

#[test]
fn unsupported_operations_and_underflow_surface_as_errors() {
    let mut gc = GraphicsContext::new(10, 10);
    assert!(matches!(
        gc.set_rendering_intent(),
        Err(RecordError::NotSupported {
            op: "set_rendering_intent"
        })
    ));
    assert!(matches!(
        gc.restore_state(),
        Err(RecordError::StateUnderflow)
    ));
    assert!(tracery_json::context_lines(&gc)
        .expect("nothing was logged")
        .is_empty());
}
