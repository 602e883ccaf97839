//! Integration tests for the scene model and its canonical markup.
//!
//! Run all tests with: cargo test

use pretty_assertions::assert_eq;
use svgtree::kurbo::{self, Affine, Point};
use svgtree::model::{
    Circle, Color, CoordinateSpaceNode, Group, LineCap, Node, Polyline, Rect, Stroke, Text,
    TextAnchor, UrlImage, UserSpace, Viewport,
};
use svgtree::parser::SvgMatchers;
use svgtree::{render_scene_json, serialize, SerializeOptions};

fn rect(id: &str, width: f64, height: f64) -> Node {
    Node::from(Rect::new(0.0, 0.0, width, height)).with_id(id)
}

fn group(id: &str, contents: Vec<Node>) -> Node {
    Node::from(Group::new(contents)).with_id(id)
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_group_with_one_rect() {
    let scene = group("root", vec![rect("r1", 10.0, 20.0)]);
    let expected = concat!(
        "<g>\n",
        "\tid=\"root\"\n",
        "\t<rect id=\"r1\" width=10 height=20></rect>\n",
        "</g>\n",
    );
    assert_eq!(serialize(&scene, None), expected);
}

#[test]
fn test_defaults_suppressed() {
    let node = rect("r", 1.0, 1.0);
    let out = serialize(&node, None);
    assert_eq!(out, "<rect id=\"r\" width=1 height=1></rect>\n");
    assert!(!out.contains("opacity"));
    assert!(!out.contains("opaque"));
    assert!(!out.contains("transform"));
}

#[test]
fn test_non_default_base_attributes() {
    let node = rect("r", 1.0, 1.0)
        .with_opacity(0.25)
        .with_opaque(false)
        .with_transform(Affine::scale(2.0));
    assert_eq!(
        serialize(&node, None),
        "<rect id=\"r\" width=1 height=1 transform=\"matrix(2, 0, 0, 2, 0, 0)\" opacity=\"0.25\" opaque=\"false\"></rect>\n"
    );
}

#[test]
fn test_opacity_out_of_range_passes_through() {
    let node = rect("r", 1.0, 1.0).with_opacity(1.5);
    assert!(serialize(&node, None).contains("opacity=\"1.5\""));
}

#[test]
fn test_missing_id_is_written_empty() {
    let node = Node::from(Rect::new(0.0, 0.0, 3.0, 4.0));
    assert_eq!(
        serialize(&node, None),
        "<rect id=\"\" width=3 height=4></rect>\n"
    );
}

#[test]
fn test_clip_reflows_simple_attributes() {
    let base = rect("r", 4.0, 3.0)
        .with_transform(Affine::translate((1.0, 2.0)))
        .with_opacity(0.5);
    assert_eq!(
        serialize(&base, None),
        "<rect id=\"r\" width=4 height=3 transform=\"matrix(1, 0, 0, 1, 1, 2)\" opacity=\"0.5\"></rect>\n"
    );

    let clipped = base.with_clip(Node::from(Circle::new(0.0, 0.0, 1.0)).with_id("c"));
    let expected = concat!(
        "<rect>\n",
        "\tid=\"r\"\n",
        "\twidth=4\n",
        "\theight=3\n",
        "\ttransform=\"matrix(1, 0, 0, 1, 1, 2)\"\n",
        "\topacity=\"0.5\"\n",
        "\tclip=<circle id=\"c\" r=1></circle>\n",
        "</rect>\n",
    );
    assert_eq!(serialize(&clipped, None), expected);
}

#[test]
fn test_nested_blocks_and_children_indent() {
    let scene = group("outer", vec![group("inner", vec![rect("a", 2.0, 2.0)])])
        .with_mask(group("m", vec![rect("mr", 1.0, 1.0)]));
    let expected = concat!(
        "<g>\n",
        "\tid=\"outer\"\n",
        "\tmask=<g>\n",
        "\t\tid=\"m\"\n",
        "\t\t<rect id=\"mr\" width=1 height=1></rect>\n",
        "\t</g>\n",
        "\t<g>\n",
        "\t\tid=\"inner\"\n",
        "\t\t<rect id=\"a\" width=2 height=2></rect>\n",
        "\t</g>\n",
        "</g>\n",
    );
    assert_eq!(serialize(&scene, None), expected);
}

#[test]
fn test_children_serialize_in_list_order() {
    let scene = group("g", vec![rect("c", 1.0, 1.0), rect("a", 1.0, 1.0), rect("b", 1.0, 1.0)]);
    let out = serialize(&scene, None);
    let c = out.find("id=\"c\"").unwrap();
    let a = out.find("id=\"a\"").unwrap();
    let b = out.find("id=\"b\"").unwrap();
    assert!(c < a && a < b);
}

#[test]
fn test_empty_group_is_single_line() {
    assert_eq!(serialize(&group("e", Vec::new()), None), "<g id=\"e\"></g>\n");
}

#[test]
fn test_viewport() {
    let mut viewport = Viewport::new(
        100.0,
        50.0,
        vec![Node::from(Circle::new(5.0, 5.0, 2.0)).with_id("c")],
    );
    viewport.view_box = Some(kurbo::Rect::new(0.0, 0.0, 10.0, 5.0));
    let expected = concat!(
        "<viewport>\n",
        "\tid=\"\"\n",
        "\twidth=100\n",
        "\theight=50\n",
        "\tviewBox=\"0 0 10 5\"\n",
        "\t<circle id=\"c\" cx=\"5\" cy=\"5\" r=2></circle>\n",
        "</viewport>\n",
    );
    assert_eq!(serialize(&Node::from(viewport), None), expected);
}

#[test]
fn test_shape_style_attributes() {
    let mut shape = Rect::new(0.0, 0.0, 1.0, 1.0);
    shape.style.fill = Some(Color::rgb(255, 0, 0));
    let mut stroke = Stroke::new(Color::BLACK, 2.0);
    stroke.cap = LineCap::Round;
    stroke.dashes = vec![4.0, 2.0];
    shape.style.stroke = Some(stroke);
    assert_eq!(
        serialize(&Node::from(shape).with_id("s"), None),
        "<rect id=\"s\" width=1 height=1 fill=\"#ff0000\" stroke=\"#000000\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-dasharray=\"4 2\"></rect>\n"
    );
}

#[test]
fn test_text_is_escaped() {
    let mut text = Text::new("a < b");
    text.anchor = TextAnchor::Middle;
    assert_eq!(
        serialize(&Node::from(text).with_id("t"), None),
        "<text id=\"t\" text=\"a &lt; b\" text-anchor=\"middle\"></text>\n"
    );
}

#[test]
fn test_polyline_points() {
    let line = Polyline::new(vec![Point::new(0.0, 0.0), Point::new(1.5, 2.0)]);
    assert_eq!(
        serialize(&Node::from(line).with_id("p"), None),
        "<polyline id=\"p\" points=\"0,0 1.5,2\"></polyline>\n"
    );
}

// ============================================================================
// Unsupported kinds
// ============================================================================

fn image(id: &str) -> Node {
    let img = UrlImage {
        width: 8.0,
        height: 8.0,
        src: "https://example.com/a.png".to_string(),
        ..Default::default()
    };
    Node::from(img).with_id(id)
}

#[test]
fn test_image_root_serializes_to_nothing() {
    assert_eq!(serialize(&image("img"), None), "");
}

#[test]
fn test_image_children_are_skipped() {
    let scene = group("g", vec![image("img"), rect("r", 1.0, 1.0)]);
    let out = serialize(&scene, None);
    assert!(!out.contains("img"));
    assert!(out.contains("<rect id=\"r\" width=1 height=1></rect>"));

    // With nothing left to render the group stays on one line.
    assert_eq!(
        serialize(&group("only", vec![image("img")]), None),
        "<g id=\"only\"></g>\n"
    );
}

#[test]
fn test_coordinate_space_clip_is_skipped() {
    let wrapper = CoordinateSpaceNode::new(rect("cr", 1.0, 1.0), UserSpace::UserSpaceOnUse);
    let node = rect("r", 2.0, 2.0).with_clip(wrapper);
    assert_eq!(
        serialize(&node, None),
        "<rect id=\"r\" width=2 height=2></rect>\n"
    );
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_custom_indent_and_no_newline() {
    let options = SerializeOptions {
        indent: "  ".to_string(),
        trailing_newline: false,
        ..Default::default()
    };
    let scene = group("root", vec![rect("r1", 1.0, 1.0)]);
    assert_eq!(
        serialize(&scene, Some(options)),
        "<g>\n  id=\"root\"\n  <rect id=\"r1\" width=1 height=1></rect>\n</g>"
    );
}

#[test]
fn test_length_threshold() {
    let options = SerializeOptions {
        max_simple_len: Some(20),
        ..Default::default()
    };
    assert_eq!(
        serialize(&rect("r", 1.0, 1.0), Some(options.clone())),
        "<rect>\n\tid=\"r\"\n\twidth=1\n\theight=1\n</rect>\n"
    );
    assert_eq!(
        serialize(&Node::from(Circle::new(0.0, 0.0, 1.0)).with_id("c"), Some(options)),
        "<circle id=\"c\" r=1></circle>\n"
    );
}

// ============================================================================
// Tree semantics
// ============================================================================

#[test]
fn test_lookup_is_depth_first_first_match() {
    let scene = group(
        "root",
        vec![
            group("left", vec![rect("dup", 1.0, 1.0).with_opacity(0.1)]),
            rect("dup", 1.0, 1.0).with_opacity(0.9),
        ],
    );
    let hit = scene.node_by_id("dup").unwrap();
    assert_eq!(hit.attrs().opacity, 0.1);
    assert_eq!(scene.node_by_id("root").unwrap().id(), Some("root"));
    assert!(scene.node_by_id("missing").is_none());
}

#[test]
fn test_group_bounds_union_and_permutation() {
    let a = Node::from(Rect::new(0.0, 0.0, 4.0, 2.0));
    let b = Node::from(Circle::new(0.0, 0.0, 3.0));
    let c = Node::from(Rect::new(0.0, 0.0, 1.0, 9.0));
    let expected = a.bounds().union(b.bounds()).union(c.bounds());

    let abc = Node::from(Group::new(vec![a.clone(), b.clone(), c.clone()]));
    let cab = Node::from(Group::new(vec![c, a, b]));
    assert_eq!(abc.bounds(), expected);
    assert_eq!(cab.bounds(), expected);
    assert_eq!(expected, kurbo::Rect::new(0.0, 0.0, 6.0, 9.0));
}

#[test]
fn test_bounds_recomputed_after_mutation() {
    let mut scene = group("g", vec![rect("r", 1.0, 1.0)]);
    assert_eq!(scene.bounds(), kurbo::Rect::new(0.0, 0.0, 1.0, 1.0));
    if let Node::Group(g) = &mut scene {
        g.set_contents(vec![rect("big", 5.0, 5.0)]);
    }
    assert_eq!(scene.bounds(), kurbo::Rect::new(0.0, 0.0, 5.0, 5.0));
}

#[test]
fn test_copy_is_independent() {
    let original = group("g", vec![rect("r", 1.0, 1.0)]).with_clip(rect("clip", 1.0, 1.0));
    let mut copy = original.copy();
    assert_eq!(copy, original);

    copy.node_by_id_mut("r").unwrap().attrs_mut().opacity = 0.3;
    copy.attrs_mut().clip.as_mut().unwrap().attrs_mut().opacity = 0.2;

    assert_eq!(original.node_by_id("r").unwrap().attrs().opacity, 1.0);
    assert_eq!(original.attrs().clip.as_ref().unwrap().attrs().opacity, 1.0);
    assert_eq!(serialize(&original, None), serialize(&original.copy(), None));
}

#[test]
fn test_serialized_transform_reads_back() {
    let matchers = SvgMatchers::new().unwrap();
    let transform = Affine::rotate(0.3) * Affine::translate((-4.5, 12.0));
    let out = serialize(&rect("r", 1.0, 1.0).with_transform(transform), None);

    let start = out.find("matrix(").unwrap();
    let end = start + out[start..].find(')').unwrap() + 1;
    assert_eq!(matchers.parse_transform(&out[start..end]).unwrap(), transform);
}

// ============================================================================
// JSON scenes
// ============================================================================

#[test]
fn test_render_scene_json() {
    let json = r##"{
        "type": "group",
        "id": "root",
        "contents": [
            {"type": "rect", "id": "r1", "width": 10, "height": 20, "fill": "#00ff00"},
            {"type": "urlImage", "id": "img", "width": 4, "height": 4, "src": "a.png"},
            {"type": "line", "x2": 3, "y2": 4, "transform": [1, 0, 0, 1, 5, 5]}
        ]
    }"##;
    let expected = concat!(
        "<g>\n",
        "\tid=\"root\"\n",
        "\t<rect id=\"r1\" width=10 height=20 fill=\"#00ff00\"></rect>\n",
        "\t<line id=\"\" x2=\"3\" y2=\"4\" transform=\"matrix(1, 0, 0, 1, 5, 5)\"></line>\n",
        "</g>\n",
    );
    assert_eq!(render_scene_json(json, None).unwrap(), expected);
}

#[test]
fn test_scene_json_errors() {
    assert!(matches!(
        render_scene_json(r#"{"type": "hexagon"}"#, None),
        Err(svgtree::Error::Scene(_))
    ));
    assert!(render_scene_json(r#"{"type": "rect", "fill": "red"}"#, None).is_err());
}

#[test]
fn test_json_description_survives_reencoding() {
    let mut scene = group("root", vec![rect("r", 2.0, 3.0).with_data_name("hero")]);
    scene.on_tap_gesture(1, || {});
    let decoded = Node::from_json(&scene.to_json().unwrap()).unwrap();
    assert_eq!(decoded, scene);
    assert!(decoded.gestures().is_empty());
    assert_eq!(decoded.node_by_data_name("hero").unwrap().id(), Some("r"));
}
