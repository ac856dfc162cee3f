use css_transform::transform;

#[test]
fn test_value_map_rewrites_values() {
    let css = "\
body {
  background: linear-gradient(#eee, #ddd);
}
";
    let out = transform(css)
        .map(|_property, value, _ctx| {
            if value.starts_with("linear-gradient") {
                return Some(format!("-webkit-{value}"));
            }
            Some(value.to_string())
        })
        .render()
        .unwrap();

    let expected = "\
body {
  background: -webkit-linear-gradient(#eee, #ddd);
}
";
    assert_eq!(out, expected);
}

#[test]
fn test_returning_none_removes_only_that_declaration() {
    let css = "\
a {
  color: red;
  width: 10px;
}
";
    let out = transform(css)
        .map(|property, value, _ctx| (property != "color").then(|| value.to_string()))
        .render()
        .unwrap();

    let expected = "\
a {
  width: 10px;
}
";
    assert_eq!(out, expected);
}

#[test]
fn test_add_property_appends_to_the_current_rule() {
    let css = "\
a {
  color: red;
}

b {
  width: 10px;
}
";
    let out = transform(css)
        .map(|property, value, ctx| {
            if property == "color" {
                ctx.add_property("outline", "none");
            }
            Some(value.to_string())
        })
        .render()
        .unwrap();

    // Only the rule that triggered the append receives it.
    let expected = "\
a {
  color: red;
  outline: none;
}

b {
  width: 10px;
}
";
    assert_eq!(out, expected);
}

#[test]
fn test_appends_are_visible_to_later_maps() {
    let out = transform("a { color: red; }")
        .map(|property, value, ctx| {
            if property == "color" {
                ctx.add_property("background", "blue");
            }
            Some(value.to_string())
        })
        .map(|property, value, _ctx| {
            if property == "background" {
                return Some("green".to_string());
            }
            Some(value.to_string())
        })
        .render()
        .unwrap();

    let expected = "\
a {
  color: red;
  background: green;
}
";
    assert_eq!(out, expected);
}

#[test]
fn test_value_maps_skip_keyframes_blocks() {
    let css = "\
@keyframes spin {
  from {
    margin-top: 0;
  }
}
";
    let out = transform(css)
        .map(|_property, _value, _ctx| Some("overwritten".to_string()))
        .render()
        .unwrap();

    let expected = "\
@keyframes spin {
  from {
    margin-top: 0;
  }
}
";
    assert_eq!(out, expected);
}
