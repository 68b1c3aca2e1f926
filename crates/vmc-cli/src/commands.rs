use anyhow::{Result, bail};

use vmc_cli::session::Session;
use vmc_core::Action;
use vmc_model::Status;
use vmc_page::{ControlStyle, Outcome, Trigger};

use crate::cli::{RenderArgs, SetArgs, SlugArgs, ToggleArgs};
use crate::summary::print_status_table;

pub fn run_list(session: &Session) -> Result<()> {
    print_status_table(&session.rows());
    Ok(())
}

pub fn run_status(session: &Session, args: &SlugArgs) -> Result<()> {
    println!("{}: {}", args.slug, session.status(&args.slug).label());
    Ok(())
}

pub fn run_toggle(session: &Session, args: &ToggleArgs) -> Result<()> {
    let action = Action::from(args.toggle);
    let outcome = session.press(&args.slug, Trigger::Toggle(action))?;
    report(&args.slug, &outcome)
}

pub fn run_checkout(session: &Session, args: &SlugArgs) -> Result<()> {
    let outcome = session.press(&args.slug, Trigger::LegacyCheckout)?;
    report(&args.slug, &outcome)
}

pub fn run_set(session: &Session, args: &SetArgs) -> Result<()> {
    let status = Status::from(args.status);
    session.set(&args.slug, status)?;
    println!("{}: {}", args.slug, status.label());
    Ok(())
}

pub fn run_render(session: &Session, args: &RenderArgs) -> Result<()> {
    let html = match &args.slug {
        Some(slug) => {
            let style = if args.legacy {
                ControlStyle::Legacy
            } else {
                session.config().detail.controls.into()
            };
            session.render_detail(slug, style)
        }
        None => session.render_catalog(),
    };
    println!("{html}");
    Ok(())
}

pub fn run_clear(session: &Session) -> Result<()> {
    session.clear()?;
    println!("All machines are available.");
    Ok(())
}

fn report(slug: &str, outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Applied(transition) => {
            println!("{}: {} -> {}", slug, transition.from.label(), transition.to.label());
            Ok(())
        }
        Outcome::Ignored => {
            println!("{slug}: unchanged (under repair)");
            Ok(())
        }
        Outcome::SaveFailed => bail!("status of {slug} could not be saved"),
    }
}
