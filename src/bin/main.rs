use catalog_core::settings::Settings;
use catalog_core::{AttributeResolver, Resolution};
use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use std::io::{self, stdin, stdout, Write};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let settings = Settings::load();
    let resolver = settings.resolver();
    let mut show_tiers = settings.show_tiers;
    let mut last: Option<(String, Resolution)> = None;

    loop {
        print_ui(&resolver, last.as_ref(), show_tiers)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim_end_matches(['\r', '\n']);

        match cmd.trim() {
            "exit" => break,
            ":tiers" => show_tiers = !show_tiers,
            _ => {
                let resolution = resolver.resolve_product_name(Some(cmd));
                last = Some((cmd.to_string(), resolution));
            }
        }
    }

    Ok(())
}

fn print_ui(
    resolver: &AttributeResolver,
    last: Option<&(String, Resolution)>,
    show_tiers: bool,
) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    writeln!(out, "{}", "Product Color Resolver".bold())?;
    writeln!(out, "---------------------------------------------------------------")?;
    writeln!(
        out,
        "{} phrases, {} keywords, {} types loaded.",
        resolver.config().phrases.len(),
        resolver.config().keywords.len(),
        resolver.config().types.len()
    )?;
    writeln!(out, "Type a product name and press [Enter]. ':tiers' toggles tier display, 'exit' quits.\n")?;

    if let Some((name, resolution)) = last {
        writeln!(out, "Product: [{}]", name)?;
        let colors = resolution.colors.join(", ");
        if resolution.is_matched() {
            writeln!(out, "Colors -> {}", colors.green())?;
        } else {
            writeln!(out, "Colors -> {}", colors.yellow())?;
        }
        if show_tiers {
            writeln!(out, "Tier   -> {}", resolution.tier.to_string().cyan())?;
        }
    }

    write!(out, "\n> ")?;
    out.flush()
}
