mod walkthrough;

use std::{fmt, iter, time::Instant};

use color_eyre::eyre;
use dialoguer::Input;
use regex::Regex;
use tracing::{trace, warn};

use iterators::{Cursor, ExtensibleList, FixedList, Iterable, LinkedList, Sequence};

/// List that free text typed at the prompt is appended to.
enum ActiveList {
    Fixed(FixedList<String>),
    Linked(LinkedList<String>),
    Extensible(ExtensibleList<String>),
}

impl ActiveList {
    fn name(&self) -> &'static str {
        match self {
            ActiveList::Fixed(_) => "fixed",
            ActiveList::Linked(_) => "linked",
            ActiveList::Extensible(_) => "extensible",
        }
    }

    fn as_sequence(&self) -> &dyn Sequence<String> {
        match self {
            ActiveList::Fixed(list) => list,
            ActiveList::Linked(list) => list,
            ActiveList::Extensible(list) => list,
        }
    }

    fn as_sequence_mut(&mut self) -> &mut dyn Sequence<String> {
        match self {
            ActiveList::Fixed(list) => list,
            ActiveList::Linked(list) => list,
            ActiveList::Extensible(list) => list,
        }
    }

    fn show(&self) -> iterators::Result<()> {
        match self {
            ActiveList::Fixed(list) => show_list(list),
            ActiveList::Linked(list) => show_list(list),
            ActiveList::Extensible(list) => show_list(list),
        }
    }
}

/// What the prompt loop should do after a command.
enum Flow {
    Continue,
    Quit,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::try_init().map_err(|e| eyre::eyre!(e))?;

    let words = Regex::new(r"[^\w'-]+")?;
    let mut active = ActiveList::Extensible(prompt_extensible_list()?);

    loop {
        let input: String = Input::new().interact()?;
        let start = Instant::now();

        if let Some(command) = input.strip_prefix('/') {
            let items = command.split_whitespace().collect::<Vec<_>>();

            match execute(&mut active, &items) {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Continue) => (),
                Err(e) => warn!(error = %e, "command failed"),
            }

            trace!(command = ?command, duration = ?start.elapsed(), "command executed");
            continue;
        }

        let list = active.as_sequence_mut();
        let before = list.len();
        let mut offered = 0;

        for word in words.split(&input).filter(|word| !word.is_empty()) {
            list.add(word.to_owned());
            offered += 1;
        }
        let added = list.len() - before;

        println!(
            " :: {} of {} words added to the {} list",
            added,
            offered,
            active.name()
        );
        trace!(added, dropped = offered - added, duration = ?start.elapsed(), "words added");
    }
}

/// Ask for a block capacity until one is accepted.
fn prompt_extensible_list() -> eyre::Result<ExtensibleList<String>> {
    first_accepted_capacity(iter::repeat_with(|| {
        Input::<usize>::new()
            .with_prompt("extensible list block capacity")
            .default(3)
            .interact()
            .map_err(eyre::Report::from)
    }))
}

/// Build an extensible list from the first of `answers` that is a valid block capacity.
///
/// Rejected capacities are logged and skipped, the way `/extensible` rejects them.
fn first_accepted_capacity<I>(answers: I) -> eyre::Result<ExtensibleList<String>>
where
    I: IntoIterator<Item = eyre::Result<usize>>,
{
    for answer in answers {
        match ExtensibleList::new(answer?) {
            Ok(list) => return Ok(list),
            Err(e) => warn!(error = %e, "invalid block capacity"),
        }
    }

    Err(eyre::eyre!("no block capacity was accepted"))
}

fn execute(active: &mut ActiveList, command: &[&str]) -> eyre::Result<Flow> {
    match command {
        [] => (),
        ["quit", ..] => return Ok(Flow::Quit),
        ["walkthrough", ..] => walkthrough::run_all()?,
        ["fixed", capacity] => *active = ActiveList::Fixed(FixedList::new(capacity.parse()?)),
        ["linked"] => *active = ActiveList::Linked(LinkedList::new()),
        ["extensible", capacity] => {
            *active = ActiveList::Extensible(ExtensibleList::new(capacity.parse()?)?)
        }
        ["get", index] => println!(" :: {}", active.as_sequence().get(index.parse()?)?),
        ["show"] => active.show()?,
        ["rev"] => match &*active {
            ActiveList::Fixed(list) => print_all(list.reversed_iter())?,
            other => println!("the {} list has no reversed traversal", other.name()),
        },
        ["blocks"] => match &*active {
            ActiveList::Extensible(list) => println!(
                " :: block sizes {:?}",
                list.blocks().map(FixedList::len).collect::<Vec<_>>()
            ),
            other => println!("the {} list is not made of blocks", other.name()),
        },
        _ => println!("unrecognised command: {}", command.join(" ")),
    }

    Ok(Flow::Continue)
}

/// Print every element of `list` in order.
fn show_list<L>(list: &L) -> iterators::Result<()>
where
    L: Iterable<String>,
{
    let cursor = list.iter();
    if !cursor.has_next() {
        println!(" :: the list is empty");
    }
    print_all(cursor)
}

/// Print every element left in `cursor`.
fn print_all<C>(mut cursor: C) -> iterators::Result<()>
where
    C: Cursor,
    C::Item: fmt::Display,
{
    while cursor.has_next() {
        println!(" - {}", cursor.next_item()?);
    }
    Ok(())
}
