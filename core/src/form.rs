//! Form input and its conversion into a `MovieRecord`.
//!
//! # Design
//! A form is passed in explicitly: named text fields plus the genre
//! checkboxes in display order. Nothing is read from shared state, so the
//! same input always serializes to the same record.

use std::collections::HashMap;

use crate::types::MovieRecord;

pub const FIELD_NAME: &str = "name";
pub const FIELD_SYNOPSIS: &str = "synopsis";
pub const FIELD_RELEASE_DATE: &str = "releaseDate";
pub const FIELD_RATING: &str = "rating";
pub const FIELD_DIRECTOR: &str = "director";
pub const FIELD_MAIN_ACTOR: &str = "mainActor";
pub const FIELD_DURATION: &str = "duration";

/// One genre checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreOption {
    pub value: String,
    pub checked: bool,
}

/// Raw values of a movie form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    fields: HashMap<String, String>,
    genres: Vec<GenreOption>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named text field, replacing any previous value.
    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    /// Append a genre checkbox. Order of calls is display order.
    pub fn genre(mut self, value: &str, checked: bool) -> Self {
        self.genres.push(GenreOption {
            value: value.to_string(),
            checked,
        });
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn genres(&self) -> &[GenreOption] {
        &self.genres
    }

    /// Pre-fill a form from an existing record, e.g. to edit a listed movie.
    ///
    /// `genre_options` are the checkboxes the form displays; each is checked
    /// when the record lists it. Not-a-number values become empty fields.
    pub fn from_record(record: &MovieRecord, genre_options: &[&str]) -> Self {
        let number = |n: Option<i64>| n.map(|v| v.to_string()).unwrap_or_default();
        let mut form = FormInput::new()
            .field(FIELD_NAME, &record.name)
            .field(FIELD_SYNOPSIS, &record.synopsis)
            .field(FIELD_RELEASE_DATE, &record.release_date)
            .field(FIELD_RATING, &number(record.rating))
            .field(FIELD_DIRECTOR, &record.director)
            .field(FIELD_MAIN_ACTOR, &record.main_actor)
            .field(FIELD_DURATION, &number(record.duration));
        for option in genre_options {
            let checked = record.genre.iter().any(|g| g == option);
            form = form.genre(option, checked);
        }
        form
    }
}

/// Turn a form into the record payload sent to the server.
///
/// `genre` holds the checked values in display order and is empty (never
/// absent) when nothing is checked. `rating` and `duration` go through
/// [`parse_int`].
pub fn serialize_form(input: &FormInput) -> MovieRecord {
    let text = |name: &str| input.get(name).unwrap_or_default().to_string();
    let genre = input
        .genres
        .iter()
        .filter(|option| option.checked)
        .map(|option| option.value.clone())
        .collect();

    MovieRecord {
        id: None,
        slug: None,
        name: text(FIELD_NAME),
        synopsis: text(FIELD_SYNOPSIS),
        release_date: text(FIELD_RELEASE_DATE),
        rating: input.get(FIELD_RATING).and_then(parse_int),
        director: text(FIELD_DIRECTOR),
        main_actor: text(FIELD_MAIN_ACTOR),
        duration: input.get(FIELD_DURATION).and_then(parse_int),
        genre,
    }
}

/// Base-10 integer prefix parse.
///
/// Skips leading whitespace, accepts one optional sign, then reads the
/// longest run of ASCII digits and ignores whatever follows. Returns `None`
/// (not-a-number) when there are no digits or the value overflows `i64`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits[..end].bytes() {
        let digit = i64::from(b - b'0');
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
    }
    Some(value)
}
