use css_transform::{TransformError, plugins, transform};

const CSS: &str = "\
#logo {
  transition: transform 1s ease;
}
";

fn main() -> Result<(), TransformError> {
    let css = transform(CSS)
        .use_plugin(plugins::transitions(["-webkit-", "-moz-", "-ms-"]))
        .render()?;

    println!("{css}");
    Ok(())
}
