use css_transform::{TransformError, transform};

const CSS: &str = "\
body {
  background: linear-gradient(#eee, #ddd);
}
";

fn main() -> Result<(), TransformError> {
    let css = transform(CSS)
        .map(|_property, value, _ctx| {
            if value.starts_with("linear-gradient") {
                return Some(format!("-webkit-{value}"));
            }
            Some(value.to_string())
        })
        .render()?;

    println!("{css}");
    Ok(())
}
