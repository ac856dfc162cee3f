use css_transform::{TransformError, transform};

const CSS: &str = "\
button {
  border-radius: 5px;
}

@keyframes animation {
  from {
    margin-top: 50px;
    border-radius: 5px;
  }

  to {
    margin-top: 100px;
  }
}
";

fn main() -> Result<(), TransformError> {
    let vendors = ["-webkit-", "-moz-", "-ms-"];

    let css = transform(CSS)
        .prefix("border-radius", vendors)
        .prefix("@keyframes", vendors)
        .prefix_selectors("#dialog")
        .render()?;

    println!("{css}");
    Ok(())
}
