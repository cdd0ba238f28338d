//! Keyword records compiled into the crate.

use crate::table::Keywords;

pub(crate) struct StaticKeywords {
    feature: &'static [&'static str],
    background: &'static [&'static str],
    scenario: &'static [&'static str],
    scenario_outline: &'static [&'static str],
    examples: &'static [&'static str],
    given: &'static [&'static str],
    when: &'static [&'static str],
    then: &'static [&'static str],
    and: &'static [&'static str],
    but: &'static [&'static str],
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

impl StaticKeywords {
    pub(crate) fn to_keywords(&self) -> Keywords {
        Keywords {
            feature: owned(self.feature),
            background: owned(self.background),
            scenario: owned(self.scenario),
            scenario_outline: owned(self.scenario_outline),
            examples: owned(self.examples),
            given: owned(self.given),
            when: owned(self.when),
            then: owned(self.then),
            and: owned(self.and),
            but: owned(self.but),
        }
    }
}

pub(crate) const BASE: &str = "en";

pub(crate) const EN: StaticKeywords = StaticKeywords {
    feature: &["Feature", "Business Need", "Ability"],
    background: &["Background"],
    scenario: &["Scenario", "Example"],
    scenario_outline: &["Scenario Outline", "Scenario Template"],
    examples: &["Examples", "Scenarios"],
    given: &["Given"],
    when: &["When"],
    then: &["Then"],
    and: &["And"],
    but: &["But"],
};

const FR: StaticKeywords = StaticKeywords {
    feature: &["Fonctionnalité"],
    background: &["Contexte"],
    scenario: &["Scénario", "Exemple"],
    scenario_outline: &["Plan du scénario", "Plan du Scénario"],
    examples: &["Exemples"],
    given: &[
        "Soit",
        "Sachant que",
        "Sachant qu'",
        "Sachant",
        "Etant donné que",
        "Etant donné qu'",
        "Etant donné",
        "Etant donnée",
        "Etant donnés",
        "Etant données",
        "Étant donné que",
        "Étant donné qu'",
        "Étant donné",
        "Étant donnée",
        "Étant donnés",
        "Étant données",
    ],
    when: &["Quand", "Lorsque", "Lorsqu'"],
    then: &["Alors", "Donc"],
    and: &["Et que", "Et qu'", "Et"],
    but: &["Mais que", "Mais qu'", "Mais"],
};

const DE: StaticKeywords = StaticKeywords {
    feature: &["Funktionalität", "Funktion"],
    background: &["Grundlage", "Hintergrund", "Voraussetzungen", "Vorbedingungen"],
    scenario: &["Szenario", "Beispiel"],
    scenario_outline: &["Szenariogrundriss", "Szenarien"],
    examples: &["Beispiele"],
    given: &["Angenommen", "Gegeben seien", "Gegeben sei"],
    when: &["Wenn"],
    then: &["Dann"],
    and: &["Und"],
    but: &["Aber"],
};

const ES: StaticKeywords = StaticKeywords {
    feature: &["Característica", "Necesidad del negocio", "Requisito"],
    background: &["Antecedentes"],
    scenario: &["Escenario", "Ejemplo"],
    scenario_outline: &["Esquema del escenario"],
    examples: &["Ejemplos"],
    given: &["Dado", "Dada", "Dados", "Dadas"],
    when: &["Cuando"],
    then: &["Entonces"],
    and: &["Y", "E"],
    but: &["Pero"],
};

pub(crate) const LOCALES: &[(&str, StaticKeywords)] = &[("fr", FR), ("de", DE), ("es", ES)];
