// SPDX-License-Identifier: PMPL-1.0-or-later

//! Behavioral tests for the text substitution engine

use polyglot_pages::substitute::translate_content;
use polyglot_pages::types::{FlatDictionary, FlatValue};

fn dict(entries: &[(&str, &str)]) -> FlatDictionary {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), FlatValue::Text(v.to_string())))
        .collect()
}

#[test]
fn verbatim_english_is_fully_replaced() {
    let baseline = dict(&[("hero.heading", "Master every exam with confidence")]);
    let target = dict(&[("hero.heading", "Domina cada examen con confianza")]);
    let template = "<h1>Master every exam with confidence</h1>";

    let result = translate_content(template, &baseline, &target);

    assert!(!result.contains("Master every exam with confidence"));
    assert!(result.contains("Domina cada examen con confianza"));
}

#[test]
fn short_values_are_never_candidates() {
    // "Hello" is exactly 5 chars; the threshold requires more.
    let baseline = dict(&[("greeting", "Hello"), ("lang", "en")]);
    let target = dict(&[("greeting", "Hola"), ("lang", "es")]);
    let template = "<p>Hello</p><span>en</span>";

    let result = translate_content(template, &baseline, &target);

    assert_eq!(result, template, "short strings must be left alone");
}

#[test]
fn identical_values_are_skipped() {
    let baseline = dict(&[("brand", "polyglot-pages forever")]);
    let target = dict(&[("brand", "polyglot-pages forever")]);
    let template = "<p>polyglot-pages forever</p>";

    let result = translate_content(template, &baseline, &target);

    assert_eq!(result, template);
}

#[test]
fn longer_strings_substitute_before_their_substrings() {
    let baseline = dict(&[
        ("title", "Welcome to the practice hub"),
        ("nav.home", "Welcome"),
    ]);
    let target = dict(&[
        ("title", "Bienvenido al centro de práctica"),
        ("nav.home", "Bienvenido"),
    ]);
    let template = "<h1>Welcome to the practice hub</h1><a>Welcome</a>";

    let result = translate_content(template, &baseline, &target);

    assert!(
        result.contains("Bienvenido al centro de práctica"),
        "long candidate must be replaced as a whole, got: {result}"
    );
    assert!(result.contains("<a>Bienvenido</a>"));
    assert!(!result.contains("Bienvenido to the practice hub"));
}

#[test]
fn line_break_segments_are_replaced_independently() {
    let baseline = dict(&[(
        "quiz.prompt",
        "From Calculus Basics<br />Find the derivative of f(x) = x^2",
    )]);
    let target = dict(&[(
        "quiz.prompt",
        "De Cálculo Básico<br />Encuentra la derivada de f(x) = x^2",
    )]);
    // The rendered page wraps the first segment in <strong>, so the joined
    // value never appears verbatim.
    let template =
        "<p><strong>From Calculus Basics</strong><br />Find the derivative of f(x) = x^2</p>";

    let result = translate_content(template, &baseline, &target);

    assert!(result.contains("De Cálculo Básico"));
    assert!(result.contains("Encuentra la derivada de f(x) = x^2"));
    assert!(!result.contains("From Calculus Basics"));
}

#[test]
fn colon_segments_are_replaced_independently() {
    let baseline = dict(&[(
        "audience.students",
        "Students: Ace exams with less stress and more results",
    )]);
    let target = dict(&[(
        "audience.students",
        "Estudiantes: Aprueba exámenes con menos estrés y más resultados",
    )]);
    let template =
        "<p><strong>Students:</strong> Ace exams with less stress and more results</p>";

    let result = translate_content(template, &baseline, &target);

    assert!(result.contains("<strong>Estudiantes:</strong>"));
    assert!(result.contains("Aprueba exámenes con menos estrés y más resultados"));
}

#[test]
fn whitespace_normalized_matching_handles_wrapped_text() {
    let baseline = dict(&[("pitch", "Practice with thousands of real questions")]);
    let target = dict(&[("pitch", "Practica con miles de preguntas reales")]);
    let template = "<p>\n      Practice with thousands\n      of real questions\n    </p>";

    let result = translate_content(template, &baseline, &target);

    assert!(result.contains("Practica con miles de preguntas reales"));
    assert!(!result.contains("Practice with thousands"));
}

#[test]
fn unmatched_candidates_leave_the_template_untouched() {
    let baseline = dict(&[("ghost", "This sentence is not in the page")]);
    let target = dict(&[("ghost", "Esta frase no está en la página")]);
    let template = "<p>Completely unrelated content</p>";

    let result = translate_content(template, &baseline, &target);

    assert_eq!(result, template);
}

#[test]
fn duplicate_text_across_keys_is_replaced_globally() {
    // Two FAQ entries share the same question text; every occurrence in the
    // buffer is rewritten.
    let baseline = dict(&[
        ("faq.0.question", "Is this service free to use?"),
        ("faq.4.question", "Is this service free to use?"),
    ]);
    let target = dict(&[
        ("faq.0.question", "¿Es gratuito este servicio?"),
        ("faq.4.question", "¿Es gratuito este servicio?"),
    ]);
    let template = "<h3>Is this service free to use?</h3><h3>Is this service free to use?</h3>";

    let result = translate_content(template, &baseline, &target);

    assert_eq!(result.matches("¿Es gratuito este servicio?").count(), 2);
    assert!(!result.contains("Is this service free to use?"));
}

#[test]
fn second_pass_over_translated_output_is_stable() {
    let baseline = dict(&[
        ("hero.heading", "Master every exam with confidence"),
        ("pitch", "Practice with thousands of real questions"),
    ]);
    let target = dict(&[
        ("hero.heading", "Domina cada examen con confianza"),
        ("pitch", "Practica con miles de preguntas reales"),
    ]);
    let template = "<h1>Master every exam with confidence</h1>\
                    <p>Practice with thousands\n   of real questions</p>";

    let first = translate_content(template, &baseline, &target);
    let second = translate_content(&first, &baseline, &target);

    assert_eq!(first, second, "re-running must not corrupt the output");
}
