// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::controller::Controller;
use crate::display::Renderer;
use crate::error::Result;
use crate::form::EditorForm;
use crate::notify::NoticeSink;
use crate::prompt;
use crate::remote::Api;

use super::{build_controller, reported};

pub async fn run(
    config: &Config,
    id: u64,
    headline: Option<String>,
    body: Option<String>,
) -> Result<()> {
    let ctrl = build_controller(config)?;
    reported(ctrl.load().await)?;

    let mut form = reported(ctrl.prepare_edit(id).await)?;
    form.headline = match headline {
        Some(h) => h,
        None => prompt::line("headline", Some(&form.headline))?,
    };
    form.body = match body {
        Some(b) => b,
        None => prompt::body(Some(&form.body))?,
    };

    run_impl(&ctrl, &form).await
}

pub(crate) async fn run_impl<A: Api, N: NoticeSink, R: Renderer>(
    ctrl: &Controller<A, N, R>,
    form: &EditorForm,
) -> Result<()> {
    let saved = reported(ctrl.save(form).await)?;
    eprintln!("updated summary #{}", saved.id);
    Ok(())
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
