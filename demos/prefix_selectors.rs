use css_transform::{TransformError, transform};

const CSS: &str = "\
button {
  color: white;
}

input {
  color: black;
}
";

fn main() -> Result<(), TransformError> {
    let css = transform(CSS).prefix_selectors("#dialog").render()?;

    println!("{css}");
    Ok(())
}
