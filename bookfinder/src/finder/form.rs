use crate::config::Profile;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Clone, Copy, Debug, EnumIter, Eq, IntoStaticStr, PartialEq)]
pub enum Field {
    Name,
    Occupation,

    #[strum(serialize = "Need (Book Title)")]
    Need,
}

impl Field {
    pub fn label(self) -> &'static str {
        self.into()
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter Name",
            Self::Occupation => "Enter Occupation",
            Self::Need => "eg. The Alchemist",
        }
    }

    fn cycle(self, fields: impl Iterator<Item = Self> + Clone) -> Self {
        fields.cycle().skip_while(|field| *field != self).nth(1).unwrap_or(self)
    }

    pub fn next(self) -> Self {
        self.cycle(Self::iter())
    }

    pub fn previous(self) -> Self {
        self.cycle(Self::iter().rev())
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Edit {
    Insert(char),
    DeleteBackward,
    Clear,
}

impl Edit {
    pub fn apply(self, text: &mut String) {
        match self {
            Self::Insert(chr) => text.push(chr),
            Self::DeleteBackward => {
                if let Some((index, _grapheme)) = text.grapheme_indices(true).next_back() {
                    text.truncate(index);
                }
            }
            Self::Clear => text.clear(),
        }
    }
}

// NOTE: the need field's text is owned by the search controller
pub struct Form {
    name: String,
    occupation: String,
    focus: Field,
}

impl Form {
    pub fn new(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            occupation: profile.occupation.clone(),
            focus: Field::Need,
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn previous_field(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_str().into(),
            Field::Occupation => self.occupation.as_str().into(),
            Field::Need => None,
        }
    }

    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => (&mut self.name).into(),
            Field::Occupation => (&mut self.occupation).into(),
            Field::Need => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Edit, Field, Form};
    use crate::config::Profile;

    fn form() -> Form {
        Form::new(&Profile {
            name: "Alex".into(),
            occupation: "College Student".into(),
        })
    }

    #[test]
    fn focus_starts_on_the_need_field_and_wraps() {
        let mut form = form();

        assert_eq!(form.focus(), Field::Need);

        form.next_field();
        assert_eq!(form.focus(), Field::Name);

        form.previous_field();
        form.previous_field();
        assert_eq!(form.focus(), Field::Occupation);
    }

    #[test]
    fn labels_match_the_inputs() {
        assert_eq!(Field::Name.label(), "Name");
        assert_eq!(Field::Need.label(), "Need (Book Title)");
    }

    #[test]
    fn delete_removes_a_whole_grapheme() {
        let mut text = String::from("cafe\u{301}");

        Edit::DeleteBackward.apply(&mut text);
        assert_eq!(text, "caf");

        Edit::Clear.apply(&mut text);
        Edit::DeleteBackward.apply(&mut text);
        assert_eq!(text, "");
    }

    #[test]
    fn profile_fields_are_editable_but_need_is_not_owned_here() {
        let mut form = form();

        if let Some(name) = form.text_mut(Field::Name) {
            Edit::Insert('!').apply(name);
        }

        assert_eq!(form.text(Field::Name), Some("Alex!"));
        assert_eq!(form.text(Field::Need), None);
    }
}
