use css_transform::{TransformError, transform};

const CSS: &str = "\
@keyframes animation {
  from {
    margin-top: 50px;
    border-radius: 5px;
  }

  50% {
    margin-top: 150px;
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
        .render()?;

    println!("{css}");
    Ok(())
}
