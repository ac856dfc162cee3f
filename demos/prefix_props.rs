use css_transform::{TransformError, transform};

const CSS: &str = "\
button {
  border-radius: 5px;
}
";

fn main() -> Result<(), TransformError> {
    let css = transform(CSS)
        .prefix("border-radius", ["-webkit-", "-moz-", "-ms-"])
        .render()?;

    println!("{css}");
    Ok(())
}
