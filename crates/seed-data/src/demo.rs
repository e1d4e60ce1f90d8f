//! The literal demo catalogue shipped with the application.
//!
//! Two Spanish-language courses for early learners: colours and counting.
//! Colour options carry a literal hex code in the image slot; the front end
//! renders a swatch instead of an asset for those.

use crate::dataset::{CourseSeed, LessonSeed, OptionSeed, SeedDataset};

/// Returns the built-in bilingual demo catalogue.
///
/// The rows use fixed identifiers so repeated seeding attempts describe the
/// same store contents. Internal consistency is covered by this module's
/// tests, so construction bypasses [`SeedDataset::from_parts`].
#[must_use]
pub fn demo_dataset() -> SeedDataset {
    SeedDataset {
        courses: vec![
            CourseSeed {
                id: 1,
                title: "Colores".to_owned(),
                short_description: "Aprende los colores fundamentales.".to_owned(),
                image_path: "colors.svg".to_owned(),
            },
            CourseSeed {
                id: 2,
                title: "Números".to_owned(),
                short_description: "Aprende a contar.".to_owned(),
                image_path: "numbers.svg".to_owned(),
            },
        ],
        lessons: vec![
            LessonSeed {
                id: 1,
                title: "Colores básicos.".to_owned(),
                course_id: 1,
            },
            LessonSeed {
                id: 2,
                title: "Un paso a la vez, contemos del 1 al 3.".to_owned(),
                course_id: 2,
            },
        ],
        options: vec![
            colour_option("Azul", "Colores-Azul.mp3", "#006cff"),
            colour_option("Rojo", "Colores-Rojo.mp3", "#e32522"),
            colour_option("Verde", "Colores-Verde.mp3", "#5cf054"),
            colour_option("Amarillo", "Colores-Amarillo.mp3", "#fff945"),
            number_option("Uno o 1", "Numeros-1.mp3", "1.svg"),
            number_option("Dos o 2", "Numeros-2.mp3", "2.svg"),
            number_option("Tres o 3", "Numeros-3.mp3", "3.svg"),
        ],
    }
}

fn colour_option(title: &str, audio: &str, hex: &str) -> OptionSeed {
    OptionSeed {
        title: title.to_owned(),
        audio_filename: audio.to_owned(),
        image_filename: hex.to_owned(),
        lesson_id: 1,
    }
}

fn number_option(title: &str, audio: &str, image: &str) -> OptionSeed {
    OptionSeed {
        title: title.to_owned(),
        audio_filename: audio.to_owned(),
        image_filename: image.to_owned(),
        lesson_id: 2,
    }
}
