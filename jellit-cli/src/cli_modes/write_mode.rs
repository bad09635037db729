use super::{
    App,
    editor_utils::{create_editor_buffer, resolve_editor},
    prompt,
};
use crate::{
    cli::{EditArgs, LogArgs},
    render::Renderer,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use jellit_core::parse_input::parse_timestamp;
use jellit_core::scales::DEFAULT_MOOD;
use jellit_core::{EntryDraft, EntryPatch, Mood};

pub fn log_entry(app: &mut App, renderer: &Renderer, args: &LogArgs) -> Result<()> {
    app.signed_in()?;

    let notes = if args.editor {
        let editor = resolve_editor(&app.config.editor);
        Some(create_editor_buffer(&editor, "")?)
    } else if args.notes.is_empty() {
        None
    } else {
        Some(args.notes.join(" "))
    };
    let mood = args
        .mood
        .as_deref()
        .map(Mood::parse)
        .transpose()?
        .unwrap_or(DEFAULT_MOOD);

    let draft = EntryDraft {
        timestamp: args.at.as_deref().map(parse_at).transpose()?,
        bristol_score: args.bristol,
        urgency_level: args.urgency,
        pain_level: args.comfort,
        mood_emoji: Some(mood),
        notes,
    };
    let entry = app.controller.cache_mut().create(draft)?;
    renderer.print_info("Entry saved.");
    renderer.print_entry_line(entry);
    Ok(())
}

pub fn edit_entry(app: &mut App, renderer: &Renderer, args: &EditArgs) -> Result<()> {
    app.signed_in()?;

    let notes = if args.clear_notes {
        Some(None)
    } else if args.editor {
        let current = app
            .controller
            .cache()
            .get(&args.id)
            .and_then(|entry| entry.notes.clone())
            .unwrap_or_default();
        let editor = resolve_editor(&app.config.editor);
        Some(Some(create_editor_buffer(&editor, &current)?))
    } else {
        args.notes.clone().map(Some)
    };

    let patch = EntryPatch {
        timestamp: args.at.as_deref().map(parse_at).transpose()?,
        bristol_score: args.bristol,
        urgency_level: args.urgency,
        pain_level: args.comfort,
        mood_emoji: args.mood.as_deref().map(Mood::parse).transpose()?.map(Some),
        notes,
    };
    if patch.is_empty() {
        anyhow::bail!("nothing to change: pass at least one field to edit");
    }

    let updated = app.controller.cache_mut().update(&args.id, patch)?;
    renderer.print_info("Entry updated.");
    renderer.print_entries(std::slice::from_ref(&updated));
    Ok(())
}

pub fn delete_entry(app: &mut App, renderer: &Renderer, id: &str, yes: bool) -> Result<()> {
    app.signed_in()?;

    if !yes {
        if let Some(entry) = app.controller.cache().get(id) {
            renderer.print_entry_line(entry);
        }
        let answer = prompt::ask(&format!("Delete entry {id}? [y/N] "))?;
        if !prompt::is_yes(&answer) {
            renderer.print_info("Nothing deleted.");
            return Ok(());
        }
    }

    app.controller.cache_mut().delete(id)?;
    renderer.print_info("Entry deleted.");
    Ok(())
}

fn parse_at(input: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(input, &Local::now())
        .with_context(|| format!("could not understand the time {input:?}"))
}
