//! Scripted traversals of sample lists.
use std::io::{self, Write};

use color_eyre::eyre;
use tracing::debug;

use iterators::{Cursor, ExtensibleList, FixedList, LinkedList};

const VENT: [&str; 3] = [
    "'            ,            ,  «   -    ».",
    "           ,             ,   '           ,   '    ,   '   .",
    "          ,       ,               .",
];

const LETTERS: [&str; 4] = [
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
    "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
    "cccccccc",
    "ddddddddddddddddddddd",
];

const GUST: [&str; 7] = [
    "Furvent, ",
    "ceux ",
    "qui ",
    "vont ",
    "mûrir ",
    "te ",
    "saluent !",
];

/// Run every walkthrough in turn.
pub fn run_all() -> eyre::Result<()> {
    section("standard vector");
    standard_vector(&mut io::stdout())?;

    let letters = LETTERS.iter().copied().collect::<LinkedList<_>>();

    section("every element");
    every_element(&letters)?;

    section("every element, twice");
    every_element_twice(&letters)?;

    section("every other element");
    every_other_element(&letters)?;

    section("extensible list");
    extensible()?;

    section("fixed list");
    fixed();

    Ok(())
}

fn section(name: &str) {
    debug!(walkthrough = name, "starting");
    println!("== {}", name);
}

/// The cursor protocol as the standard library spells it, over a plain vector.
fn standard_vector<W: Write>(out: &mut W) -> io::Result<()> {
    let vent = VENT.to_vec();

    for line in vent.iter() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn every_element(list: &LinkedList<&str>) -> iterators::Result<()> {
    let mut cursor = list.iter();

    while cursor.has_next() {
        println!("{}", cursor.next_item()?);
    }
    Ok(())
}

fn every_element_twice(list: &LinkedList<&str>) -> iterators::Result<()> {
    let mut cursor = list.iter();

    while cursor.has_next() {
        let elt = cursor.next_item()?;
        println!("{}", elt);
        println!("{}", elt);
    }
    Ok(())
}

fn every_other_element(list: &LinkedList<&str>) -> iterators::Result<()> {
    let mut cursor = list.iter();

    while cursor.has_next() {
        println!("{}", cursor.next_item()?);

        // Skipping requires a check of its own, the list may end right here.
        if cursor.has_next() {
            cursor.next_item()?;
        }
    }
    Ok(())
}

fn extensible() -> iterators::Result<()> {
    let gust = ExtensibleList::with_items(3, GUST.iter().copied())?;

    for word in &gust {
        println!("{}", word);
    }
    Ok(())
}

fn fixed() {
    let mut list = FixedList::new(3);
    ["a", "b", "c", "d"].iter().for_each(|&elt| list.add(elt));

    println!("size {} of capacity {}", list.len(), list.capacity());
    for elt in list.iter() {
        println!("{}", elt);
    }
    for elt in list.reversed_iter() {
        println!("{}", elt);
    }
}
