//! Passenger form fields and in-place editing.

use skyseat_core::BookingForm;

/// Longest value accepted by a text field.
pub const MAX_TEXT_LEN: usize = 64;
/// Longest luggage weight accepted, in digits.
pub const MAX_LUGGAGE_DIGITS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Email,
    Gender,
    Meal,
    Wheelchair,
    Luggage,
    Payment,
    Submit,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Name,
        FormField::Phone,
        FormField::Email,
        FormField::Gender,
        FormField::Meal,
        FormField::Wheelchair,
        FormField::Luggage,
        FormField::Payment,
        FormField::Submit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Phone => "Phone",
            FormField::Email => "Email",
            FormField::Gender => "Gender",
            FormField::Meal => "Meal",
            FormField::Wheelchair => "Wheelchair",
            FormField::Luggage => "Luggage (kg)",
            FormField::Payment => "Payment",
            FormField::Submit => "Submit",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> FormField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> FormField {
        let idx = self.index();
        let prev = if idx == 0 { Self::ALL.len() - 1 } else { idx - 1 };
        Self::ALL[prev]
    }

    /// Whether typed characters go into this field.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            FormField::Name | FormField::Phone | FormField::Email | FormField::Luggage
        )
    }

    /// Current value as displayed.
    pub fn value(&self, form: &BookingForm) -> String {
        match self {
            FormField::Name => form.name.clone(),
            FormField::Phone => form.phone.clone(),
            FormField::Email => form.email.clone(),
            FormField::Gender => form.gender.label().to_string(),
            FormField::Meal => form.meal.label().to_string(),
            FormField::Wheelchair => if form.wheelchair { "Yes" } else { "No" }.to_string(),
            FormField::Luggage => form.luggage.clone(),
            FormField::Payment => form.payment_method.label().to_string(),
            FormField::Submit => String::new(),
        }
    }

    /// Type a character into the field. Returns whether the form changed.
    pub fn insert_char(&self, form: &mut BookingForm, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        let target = match self {
            FormField::Name => &mut form.name,
            FormField::Phone => &mut form.phone,
            FormField::Email => &mut form.email,
            FormField::Luggage => {
                if !c.is_ascii_digit() || form.luggage.len() >= MAX_LUGGAGE_DIGITS {
                    return false;
                }
                &mut form.luggage
            }
            _ => return false,
        };
        if target.chars().count() >= MAX_TEXT_LEN {
            return false;
        }
        target.push(c);
        true
    }

    pub fn backspace(&self, form: &mut BookingForm) -> bool {
        let target = match self {
            FormField::Name => &mut form.name,
            FormField::Phone => &mut form.phone,
            FormField::Email => &mut form.email,
            FormField::Luggage => &mut form.luggage,
            _ => return false,
        };
        target.pop().is_some()
    }

    /// Step a choice field forward or backward; toggles the wheelchair flag.
    pub fn cycle(&self, form: &mut BookingForm, forward: bool) -> bool {
        match self {
            FormField::Gender => {
                form.gender = if forward { form.gender.next() } else { form.gender.previous() };
            }
            FormField::Meal => {
                form.meal = if forward { form.meal.next() } else { form.meal.previous() };
            }
            FormField::Payment => {
                form.payment_method = if forward {
                    form.payment_method.next()
                } else {
                    form.payment_method.previous()
                };
            }
            FormField::Wheelchair => form.wheelchair = !form.wheelchair,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyseat_core::{Gender, MealPreference};

    #[test]
    fn field_order_wraps() {
        assert_eq!(FormField::Submit.next(), FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::Submit);
        assert_eq!(FormField::Email.next(), FormField::Gender);
    }

    #[test]
    fn typing_and_backspace_edit_text_fields() {
        let mut form = BookingForm::default();
        assert!(FormField::Name.insert_char(&mut form, 'A'));
        assert!(FormField::Name.insert_char(&mut form, 'l'));
        assert!(FormField::Name.backspace(&mut form));
        assert_eq!(form.name, "A");
        assert!(!FormField::Gender.insert_char(&mut form, 'x'));
    }

    #[test]
    fn luggage_accepts_digits_only() {
        let mut form = BookingForm::default();
        assert!(FormField::Luggage.insert_char(&mut form, '2'));
        assert!(!FormField::Luggage.insert_char(&mut form, 'k'));
        assert!(FormField::Luggage.insert_char(&mut form, '5'));
        assert_eq!(form.luggage_kg(), 25);
    }

    #[test]
    fn luggage_length_is_capped() {
        let mut form = BookingForm::default();
        for _ in 0..10 {
            FormField::Luggage.insert_char(&mut form, '9');
        }
        assert_eq!(form.luggage.len(), MAX_LUGGAGE_DIGITS);
    }

    #[test]
    fn choice_fields_cycle() {
        let mut form = BookingForm::default();
        assert!(FormField::Gender.cycle(&mut form, true));
        assert_eq!(form.gender, Gender::Female);
        assert!(FormField::Meal.cycle(&mut form, true));
        assert_eq!(form.meal, MealPreference::Vegetarian);
        assert!(FormField::Wheelchair.cycle(&mut form, false));
        assert!(form.wheelchair);
        assert!(!FormField::Name.cycle(&mut form, true));
    }
}
