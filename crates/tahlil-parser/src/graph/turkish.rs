// Bundled Turkish suffix graph.
//
// Covers nominal inflection (agreement, possession, case), the zero copula,
// common nominal and verbal derivations, verb polarity, tense and person,
// pronouns, numerals, proper nouns and the closed word classes.
//
// Template notation is described in `suffix::form_sequence`.

use tahlil_core::{LexemeAttribute, PrimaryPos, SecondaryPos};

use crate::error::GrammarError;
use crate::graph::SuffixGraph;
use crate::suffix::condition::{
    applies_to_root, comes_after, comes_after_any, comes_after_derivation, followed_by,
    has_derivation, has_lexeme_attribute, root_has_attribute,
};
use crate::suffix::{Condition, FormConditions, GroupId, StateId, StateKind, SuffixId};

/// Build the bundled grammar.
pub fn grammar() -> Result<SuffixGraph, GrammarError> {
    let mut g = SuffixGraph::new();
    let s = States::declare(&mut g)?;
    let groups = Groups {
        agreements: g.group("Agreements"),
        possessives: g.group("Possessives"),
        cases: g.group("Cases"),
        polarities: g.group("Polarities"),
        tenses: g.group("Tenses"),
        copula_tenses: g.group("CopulaTenses"),
    };

    let shared = noun(&mut g, &s, &groups)?;
    proper_noun(&mut g, &s)?;
    adjective(&mut g, &s, &shared)?;
    adverb(&mut g, &s)?;
    pronoun(&mut g, &s, &groups)?;
    verb(&mut g, &s, &groups)?;
    numeral(&mut g, &s)?;
    root_states(&mut g, &s);
    Ok(g)
}

struct Groups {
    agreements: GroupId,
    possessives: GroupId,
    cases: GroupId,
    polarities: GroupId,
    tenses: GroupId,
    copula_tenses: GroupId,
}

/// Derivations reachable from both nouns and adjectives.
struct Shared {
    ness: SuffixId,
    become_verb: SuffixId,
}

struct States {
    noun_root: StateId,
    noun_with_agreement: StateId,
    noun_with_possession: StateId,
    noun_with_case: StateId,
    noun_terminal: StateId,
    noun_deriv: StateId,
    noun_nom_deriv: StateId,
    proper_noun_root: StateId,

    adjective_root: StateId,
    adjective_terminal: StateId,
    adjective_deriv: StateId,

    adverb_root: StateId,
    adverb_terminal: StateId,

    pronoun_root: StateId,
    pronoun_with_agreement: StateId,
    pronoun_with_possession: StateId,
    pronoun_with_case: StateId,
    pronoun_terminal: StateId,
    pronoun_deriv: StateId,

    verb_root: StateId,
    verb_plain_deriv: StateId,
    verb_with_polarity: StateId,
    verb_polarity_deriv: StateId,
    verb_with_tense: StateId,
    verb_imperative: StateId,
    verb_copula: StateId,
    verb_terminal: StateId,

    numeral_root: StateId,
    numeral_terminal: StateId,
    numeral_deriv: StateId,

    closed_class: Vec<(PrimaryPos, StateId)>,
}

impl States {
    fn declare(g: &mut SuffixGraph) -> Result<Self, GrammarError> {
        use PrimaryPos::*;
        use StateKind::*;

        let mut closed_class = Vec::new();
        for (pos, name) in [
            (Conjunction, "CONJUNCTION_ROOT"),
            (Interjection, "INTERJECTION_ROOT"),
            (Determiner, "DETERMINER_ROOT"),
            (Postposition, "POSTPOSITION_ROOT"),
            (Question, "QUESTION_ROOT"),
            (Punctuation, "PUNCTUATION_ROOT"),
            (Part, "PART_ROOT"),
        ] {
            closed_class.push((pos, g.add_state(name, Terminal, pos)?));
        }

        Ok(Self {
            noun_root: g.add_state("NOUN_ROOT", NonTerminal, Noun)?,
            noun_with_agreement: g.add_state("NOUN_WITH_AGREEMENT", NonTerminal, Noun)?,
            noun_with_possession: g.add_state("NOUN_WITH_POSSESSION", NonTerminal, Noun)?,
            noun_with_case: g.add_state("NOUN_WITH_CASE", Transfer, Noun)?,
            noun_terminal: g.add_state("NOUN_TERMINAL", Terminal, Noun)?,
            noun_deriv: g.add_state("NOUN_DERIV", Derivational, Noun)?,
            noun_nom_deriv: g.add_state("NOUN_NOM_DERIV", Derivational, Noun)?,
            proper_noun_root: g.add_state("PROPER_NOUN_ROOT", NonTerminal, Noun)?,

            adjective_root: g.add_state("ADJECTIVE_ROOT", NonTerminal, Adjective)?,
            adjective_terminal: g.add_state("ADJECTIVE_TERMINAL", Terminal, Adjective)?,
            adjective_deriv: g.add_state("ADJECTIVE_DERIV", Derivational, Adjective)?,

            adverb_root: g.add_state("ADVERB_ROOT", NonTerminal, Adverb)?,
            adverb_terminal: g.add_state("ADVERB_TERMINAL", Terminal, Adverb)?,

            pronoun_root: g.add_state("PRONOUN_ROOT", NonTerminal, Pronoun)?,
            pronoun_with_agreement: g.add_state("PRONOUN_WITH_AGREEMENT", NonTerminal, Pronoun)?,
            pronoun_with_possession: g.add_state("PRONOUN_WITH_POSSESSION", NonTerminal, Pronoun)?,
            pronoun_with_case: g.add_state("PRONOUN_WITH_CASE", Transfer, Pronoun)?,
            pronoun_terminal: g.add_state("PRONOUN_TERMINAL", Terminal, Pronoun)?,
            pronoun_deriv: g.add_state("PRONOUN_DERIV", Derivational, Pronoun)?,

            verb_root: g.add_state("VERB_ROOT", NonTerminal, Verb)?,
            verb_plain_deriv: g.add_state("VERB_PLAIN_DERIV", Derivational, Verb)?,
            verb_with_polarity: g.add_state("VERB_WITH_POLARITY", NonTerminal, Verb)?,
            verb_polarity_deriv: g.add_state("VERB_POLARITY_DERIV", Derivational, Verb)?,
            verb_with_tense: g.add_state("VERB_WITH_TENSE", NonTerminal, Verb)?,
            verb_imperative: g.add_state("VERB_IMPERATIVE", NonTerminal, Verb)?,
            verb_copula: g.add_state("VERB_COPULA", NonTerminal, Verb)?,
            verb_terminal: g.add_state("VERB_TERMINAL", Terminal, Verb)?,

            numeral_root: g.add_state("NUMERAL_ROOT", NonTerminal, Numeral)?,
            numeral_terminal: g.add_state("NUMERAL_TERMINAL", Terminal, Numeral)?,
            numeral_deriv: g.add_state("NUMERAL_DERIV", Derivational, Numeral)?,

            closed_class,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A suffix that only moves between states and is not printed.
fn free(g: &mut SuffixGraph, name: &str) -> Result<SuffixId, GrammarError> {
    let id = g.add_suffix(name, None, None, false)?;
    g.add_form(id, "", FormConditions::none())?;
    Ok(id)
}

fn suffix(
    g: &mut SuffixGraph,
    name: &str,
    pretty: &str,
    group: Option<GroupId>,
) -> Result<SuffixId, GrammarError> {
    g.add_suffix(name, Some(pretty), group, false)
}

/// A suffix with unconditional forms.
fn simple(
    g: &mut SuffixGraph,
    name: &str,
    pretty: &str,
    group: Option<GroupId>,
    templates: &[&str],
) -> Result<SuffixId, GrammarError> {
    let id = suffix(g, name, pretty, group)?;
    for template in templates {
        g.add_form(id, template, FormConditions::none())?;
    }
    Ok(id)
}

fn connect(g: &mut SuffixGraph, from: StateId, suffixes: &[SuffixId], to: StateId) {
    for &s in suffixes {
        g.add_edge(from, s, to);
    }
}

/// A progressive-vowel-drop verb still in its dictionary spelling with
/// nothing but blank suffixes after it. `ara` + `yor` is spelled `arıyor`,
/// which the dropped root `ar` produces.
fn unmodified_vowel_drop_root() -> Condition {
    Condition::new(|c| {
        let root = c.root();
        let lexeme = root.lexeme();
        lexeme.has_attribute(LexemeAttribute::ProgressiveVowelDrop)
            && root.as_str() == lexeme.lemma_root()
            && c.last_non_blank().is_none()
    })
}

// ---------------------------------------------------------------------------
// Nouns
// ---------------------------------------------------------------------------

fn noun(g: &mut SuffixGraph, s: &States, groups: &Groups) -> Result<Shared, GrammarError> {
    let plural = root_has_attribute(LexemeAttribute::Plural);

    let a3sg = suffix(g, "A3sg", "A3sg", Some(groups.agreements))?;
    g.add_form(a3sg, "", (!plural.clone()).into())?;
    let a3pl = suffix(g, "A3pl", "A3pl", Some(groups.agreements))?;
    g.add_form(a3pl, "lAr", (!plural.clone()).into())?;
    g.add_form(a3pl, "", plural.into())?;
    connect(g, s.noun_root, &[a3sg, a3pl], s.noun_with_agreement);

    let poss = Some(groups.possessives);
    let pnon = simple(g, "Pnon", "Pnon", poss, &[""])?;
    let p1sg = simple(g, "P1sg", "P1sg", poss, &["+Im"])?;
    let p2sg = simple(g, "P2sg", "P2sg", poss, &["+In"])?;
    let p3sg = simple(g, "P3sg", "P3sg", poss, &["+sI"])?;
    let p1pl = simple(g, "P1pl", "P1pl", poss, &["+ImIz"])?;
    let p2pl = simple(g, "P2pl", "P2pl", poss, &["+InIz"])?;
    let p3pl = suffix(g, "P3pl", "P3pl", poss)?;
    g.add_form(p3pl, "lArI", (!comes_after(a3pl)).into())?;
    g.add_form(p3pl, "I", comes_after(a3pl).into())?;
    connect(
        g,
        s.noun_with_agreement,
        &[pnon, p1sg, p2sg, p3sg, p1pl, p2pl, p3pl],
        s.noun_with_possession,
    );

    // Cases take an extra `n` after a third person possessive.
    let after_p3 = comes_after_any(&[p3sg, p3pl]);
    let cases = Some(groups.cases);
    let case = |g: &mut SuffixGraph, name: &str, plain: &str, after: Option<&str>| {
        let id = suffix(g, name, name, cases)?;
        match after {
            Some(after) => {
                g.add_form(id, plain, (!after_p3.clone()).into())?;
                g.add_form(id, after, after_p3.clone().into())?;
            }
            None => {
                g.add_form(id, plain, FormConditions::none())?;
            }
        }
        Ok::<_, GrammarError>(id)
    };
    let nom = case(g, "Nom", "", None)?;
    let acc = case(g, "Acc", "+yI", Some("nI"))?;
    let dat = case(g, "Dat", "+yA", Some("nA"))?;
    let loc = case(g, "Loc", "dA", Some("ndA"))?;
    let abl = case(g, "Abl", "dAn", Some("ndAn"))?;
    let genitive = case(g, "Gen", "+nIn", None)?;
    let ins = case(g, "Ins", "+ylA", None)?;
    let equ = case(g, "Equ", "cA", Some("ncA"))?;
    connect(
        g,
        s.noun_with_possession,
        &[nom, acc, dat, loc, abl, genitive, ins, equ],
        s.noun_with_case,
    );

    // Derivations from the bare nominative.
    let nom_deriv = suffix(g, "Nom_Deriv", "Nom", cases)?;
    g.add_form(nom_deriv, "", comes_after(pnon).into())?;
    g.add_edge(s.noun_with_possession, nom_deriv, s.noun_nom_deriv);

    let with = simple(g, "With", "With", None, &["lI"])?;
    let without = simple(g, "Without", "Without", None, &["sIz"])?;
    connect(g, s.noun_nom_deriv, &[with, without], s.adjective_root);
    let ness = simple(g, "Ness", "Ness", None, &["lIk"])?;
    let agt = simple(g, "Agt", "Agt", None, &["cI"])?;
    let dim = simple(g, "Dim", "Dim", None, &["cIk"])?;
    connect(g, s.noun_nom_deriv, &[ness, agt, dim], s.noun_root);
    let become_verb = simple(g, "Become", "Become", None, &["lAş"])?;
    let acquire = simple(g, "Acquire", "Acquire", None, &["lAn"])?;
    connect(g, s.noun_nom_deriv, &[become_verb, acquire], s.verb_root);

    let noun_free = free(g, "Noun_Free")?;
    g.add_edge(s.noun_with_case, noun_free, s.noun_terminal);
    let noun_copula_free = free(g, "Noun_Copula_Free")?;
    g.add_edge(s.noun_with_case, noun_copula_free, s.noun_deriv);

    let noun_zero = simple(g, "Noun_Zero", "Zero", None, &[""])?;
    g.add_edge(s.noun_deriv, noun_zero, s.verb_copula);
    let rel = suffix(g, "Rel", "Rel", None)?;
    g.add_form(rel, "ki", comes_after(loc).into())?;
    g.add_edge(s.noun_deriv, rel, s.adjective_root);

    Ok(Shared { ness, become_verb })
}

fn proper_noun(g: &mut SuffixGraph, s: &States) -> Result<(), GrammarError> {
    let apos = simple(g, "Prop_Apos", "Apos", None, &["'"])?;
    let prop_free = free(g, "Prop_Free")?;
    connect(g, s.proper_noun_root, &[apos, prop_free], s.noun_root);
    Ok(())
}

// ---------------------------------------------------------------------------
// Adjectives and adverbs
// ---------------------------------------------------------------------------

fn adjective(g: &mut SuffixGraph, s: &States, shared: &Shared) -> Result<(), GrammarError> {
    let adj_free = free(g, "Adj_Free")?;
    g.add_edge(s.adjective_root, adj_free, s.adjective_terminal);
    let adj_deriv_free = free(g, "Adj_Deriv_Free")?;
    g.add_edge(s.adjective_root, adj_deriv_free, s.adjective_deriv);

    let adj_zero = simple(g, "Adj_Zero", "Zero", None, &[""])?;
    connect(g, s.adjective_deriv, &[adj_zero, shared.ness], s.noun_root);
    let ly = simple(g, "Ly", "Ly", None, &["cA"])?;
    g.add_edge(s.adjective_deriv, ly, s.adverb_root);
    g.add_edge(s.adjective_deriv, shared.become_verb, s.verb_root);
    Ok(())
}

fn adverb(g: &mut SuffixGraph, s: &States) -> Result<(), GrammarError> {
    let adv_free = free(g, "Adv_Free")?;
    g.add_edge(s.adverb_root, adv_free, s.adverb_terminal);
    Ok(())
}

// ---------------------------------------------------------------------------
// Pronouns
// ---------------------------------------------------------------------------

fn pronoun(g: &mut SuffixGraph, s: &States, groups: &Groups) -> Result<(), GrammarError> {
    let agreements = Some(groups.agreements);
    // Personal agreements are only reached through predefined paths.
    for (name, pretty) in [
        ("Pron_A1sg", "A1sg"),
        ("Pron_A2sg", "A2sg"),
        ("Pron_A1pl", "A1pl"),
        ("Pron_A2pl", "A2pl"),
    ] {
        simple(g, name, pretty, agreements, &[""])?;
    }
    let a3sg = simple(g, "Pron_A3sg", "A3sg", agreements, &[""])?;
    let a3pl = simple(g, "Pron_A3pl", "A3pl", agreements, &["lAr"])?;
    connect(g, s.pronoun_root, &[a3sg, a3pl], s.pronoun_with_agreement);

    let pnon = simple(g, "Pron_Pnon", "Pnon", Some(groups.possessives), &[""])?;
    g.add_edge(s.pronoun_with_agreement, pnon, s.pronoun_with_possession);

    let cases = Some(groups.cases);
    let nom = simple(g, "Pron_Nom", "Nom", cases, &[""])?;
    let acc = simple(g, "Pron_Acc", "Acc", cases, &["+yI"])?;
    let dat = simple(g, "Pron_Dat", "Dat", cases, &["+yA"])?;
    let loc = simple(g, "Pron_Loc", "Loc", cases, &["dA"])?;
    let abl = simple(g, "Pron_Abl", "Abl", cases, &["dAn"])?;

    // Irregular genitive and instrumental of singular personal and
    // demonstrative pronouns: benim, seninle, onunla.
    let singular = !comes_after(a3pl);
    let first_person = applies_to_root(&["ben", "biz"]) & singular.clone();
    let second_person = applies_to_root(&["sen", "siz"]) & singular.clone();
    let demonstrative = applies_to_root(&["o", "bu", "şu"]) & singular;

    let genitive = suffix(g, "Pron_Gen", "Gen", cases)?;
    g.add_form(genitive, "+nIn", (!first_person.clone()).into())?;
    g.add_form(genitive, "im", first_person.clone().into())?;

    let ins = suffix(g, "Pron_Ins", "Ins", cases)?;
    let irregular = first_person.clone() | second_person.clone() | demonstrative.clone();
    g.add_form(ins, "+ylA", (!irregular).into())?;
    g.add_form(ins, "imle", first_person.into())?;
    g.add_form(ins, "inle", second_person.into())?;
    g.add_form(ins, "unla", demonstrative.into())?;

    connect(
        g,
        s.pronoun_with_possession,
        &[nom, acc, dat, loc, abl, genitive, ins],
        s.pronoun_with_case,
    );

    let pron_free = free(g, "Pron_Free")?;
    g.add_edge(s.pronoun_with_case, pron_free, s.pronoun_terminal);
    let pron_deriv_free = free(g, "Pron_Deriv_Free")?;
    g.add_edge(s.pronoun_with_case, pron_deriv_free, s.pronoun_deriv);
    let pron_zero = simple(g, "Pron_Zero", "Zero", None, &[""])?;
    g.add_edge(s.pronoun_deriv, pron_zero, s.verb_copula);
    Ok(())
}

// ---------------------------------------------------------------------------
// Verbs
// ---------------------------------------------------------------------------

fn verb(g: &mut SuffixGraph, s: &States, groups: &Groups) -> Result<(), GrammarError> {
    use LexemeAttribute::*;

    let tenses = Some(groups.tenses);
    let prog = suffix(g, "Prog", "Prog", tenses)?;
    g.add_form(prog, "+Iyor", (!unmodified_vowel_drop_root()).into())?;

    // Polarity
    let polarities = Some(groups.polarities);
    let pos = simple(g, "Pos", "Pos", polarities, &[""])?;
    let neg = suffix(g, "Neg", "Neg", polarities)?;
    g.add_form(neg, "mA", FormConditions::post(!followed_by(prog)))?;
    g.add_form(neg, "m", FormConditions::post(followed_by(prog)))?;
    connect(g, s.verb_root, &[pos, neg], s.verb_with_polarity);

    // Voice derivations
    let fresh = !has_derivation();
    let caus = g.add_suffix("Caus", Some("Caus"), None, true)?;
    let on_root = |attribute| root_has_attribute(attribute) & fresh.clone();
    g.add_form(
        caus,
        "t",
        (on_root(CausativeT) | comes_after_derivation(caus)).into(),
    )?;
    g.add_form(caus, "Ir", on_root(CausativeIr).into())?;
    g.add_form(caus, "It", on_root(CausativeIt).into())?;
    g.add_form(caus, "Ar", on_root(CausativeAr).into())?;
    g.add_form(caus, "dIr", on_root(CausativeDir).into())?;

    let pass = suffix(g, "Pass", "Pass", None)?;
    g.add_form(pass, "+In", on_root(PassiveIn).into())?;
    g.add_form(
        pass,
        "Il",
        (on_root(PassiveIl) | comes_after_derivation(caus)).into(),
    )?;
    g.add_form(pass, "InIl", on_root(PassiveInIl).into())?;

    let able = simple(g, "Able", "Able", None, &["+yAbil"])?;

    let verb_deriv_free = free(g, "Verb_Deriv_Free")?;
    g.add_edge(s.verb_root, verb_deriv_free, s.verb_plain_deriv);
    connect(g, s.verb_plain_deriv, &[caus, pass, able], s.verb_root);

    // Tenses
    let fut = simple(g, "Fut", "Fut", tenses, &["+yAcAk"])?;
    let past = simple(g, "Past", "Past", tenses, &["dI"])?;
    let narr = simple(g, "Narr", "Narr", tenses, &["mIş"])?;
    let aor = suffix(g, "Aor", "Aor", tenses)?;
    let positive = !comes_after(neg);
    g.add_form(
        aor,
        "+Ir",
        ((has_lexeme_attribute(AoristI) | has_derivation()) & positive.clone()).into(),
    )?;
    g.add_form(
        aor,
        "+Ar",
        (has_lexeme_attribute(AoristA) & fresh.clone() & positive).into(),
    )?;
    g.add_form(aor, "z", comes_after(neg).into())?;
    let neces = simple(g, "Neces", "Neces", tenses, &["mAlI"])?;
    let opt = simple(g, "Opt", "Opt", tenses, &["+yA"])?;
    let desr = simple(g, "Desr", "Desr", tenses, &["sA"])?;
    connect(
        g,
        s.verb_with_polarity,
        &[prog, fut, past, narr, aor, neces, opt, desr],
        s.verb_with_tense,
    );

    let imp = simple(g, "Imp", "Imp", tenses, &[""])?;
    g.add_edge(s.verb_with_polarity, imp, s.verb_imperative);

    // Nominal and adverbial derivations
    let polarity_deriv_free = free(g, "Verb_Polarity_Deriv_Free")?;
    g.add_edge(
        s.verb_with_polarity,
        polarity_deriv_free,
        s.verb_polarity_deriv,
    );
    let inf1 = simple(g, "Inf1", "Inf", None, &["mAk"])?;
    let inf2 = simple(g, "Inf2", "Inf", None, &["mA"])?;
    let inf3 = simple(g, "Inf3", "Inf", None, &["+yIş"])?;
    let past_part = simple(g, "PastPart", "PastPart", None, &["dIk"])?;
    let fut_part = simple(g, "FutPart", "FutPart", None, &["+yAcAk"])?;
    connect(
        g,
        s.verb_polarity_deriv,
        &[inf1, inf2, inf3, past_part, fut_part],
        s.noun_root,
    );
    let pres_part = simple(g, "PresPart", "PresPart", None, &["+yAn"])?;
    g.add_edge(s.verb_polarity_deriv, pres_part, s.adjective_root);
    let after_doing_so = simple(g, "AfterDoingSo", "AfterDoingSo", None, &["+yIp"])?;
    let by_doing_so = simple(g, "ByDoingSo", "ByDoingSo", None, &["+yArAk"])?;
    connect(
        g,
        s.verb_polarity_deriv,
        &[after_doing_so, by_doing_so],
        s.adverb_root,
    );

    // Imperative persons
    let agreements = Some(groups.agreements);
    let imp_a2sg = simple(g, "Imp_A2sg", "A2sg", agreements, &[""])?;
    let imp_a3sg = simple(g, "Imp_A3sg", "A3sg", agreements, &["sIn"])?;
    let imp_a2pl = simple(g, "Imp_A2pl", "A2pl", agreements, &["+yIn", "+yInIz"])?;
    let imp_a3pl = simple(g, "Imp_A3pl", "A3pl", agreements, &["sInlAr"])?;
    connect(
        g,
        s.verb_imperative,
        &[imp_a2sg, imp_a3sg, imp_a2pl, imp_a3pl],
        s.verb_terminal,
    );

    // Copula tenses, on the zero copula and stacked on a verb tense
    let copula_tenses = Some(groups.copula_tenses);
    let pres = simple(g, "Pres", "Pres", copula_tenses, &[""])?;
    let past_cop = simple(g, "Past_Cop", "Past", copula_tenses, &["+ydI"])?;
    let narr_cop = simple(g, "Narr_Cop", "Narr", copula_tenses, &["+ymIş"])?;
    let cond_cop = simple(g, "Cond_Cop", "Cond", copula_tenses, &["+ysA"])?;
    connect(
        g,
        s.verb_copula,
        &[pres, past_cop, narr_cop, cond_cop],
        s.verb_with_tense,
    );
    connect(
        g,
        s.verb_with_tense,
        &[past_cop, narr_cop, cond_cop],
        s.verb_with_tense,
    );

    // Persons. Past and conditional tenses take the short set.
    let short = comes_after_any(&[past, desr, past_cop, cond_cop]);
    let long = !short.clone();
    let person =
        |g: &mut SuffixGraph, name: &str, pretty: &str| suffix(g, name, pretty, agreements);

    let a1sg = person(g, "Verb_A1sg", "A1sg")?;
    g.add_form(a1sg, "+yIm", long.clone().into())?;
    g.add_form(a1sg, "m", short.clone().into())?;
    let a2sg = person(g, "Verb_A2sg", "A2sg")?;
    g.add_form(a2sg, "sIn", long.clone().into())?;
    g.add_form(a2sg, "n", short.clone().into())?;
    let a3sg = person(g, "Verb_A3sg", "A3sg")?;
    g.add_form(a3sg, "", (!comes_after(pres)).into())?;
    g.add_form(a3sg, "dIr", long.clone().into())?;
    let a1pl = person(g, "Verb_A1pl", "A1pl")?;
    g.add_form(a1pl, "+yIz", (long.clone() & !comes_after(opt)).into())?;
    g.add_form(a1pl, "k", short.clone().into())?;
    g.add_form(a1pl, "lIm", comes_after(opt).into())?;
    let a2pl = person(g, "Verb_A2pl", "A2pl")?;
    g.add_form(a2pl, "sInIz", long.into())?;
    g.add_form(a2pl, "nIz", short.into())?;
    let a3pl = simple(g, "Verb_A3pl", "A3pl", agreements, &["lAr"])?;
    connect(
        g,
        s.verb_with_tense,
        &[a1sg, a2sg, a3sg, a1pl, a2pl, a3pl],
        s.verb_terminal,
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Numerals and root states
// ---------------------------------------------------------------------------

fn numeral(g: &mut SuffixGraph, s: &States) -> Result<(), GrammarError> {
    let num_free = free(g, "Num_Free")?;
    g.add_edge(s.numeral_root, num_free, s.numeral_terminal);
    let num_deriv_free = free(g, "Num_Deriv_Free")?;
    let apos = simple(g, "Num_Apos", "Apos", None, &["'"])?;
    connect(g, s.numeral_root, &[num_deriv_free, apos], s.numeral_deriv);
    let num_zero = simple(g, "Num_Zero", "Zero", None, &[""])?;
    g.add_edge(s.numeral_deriv, num_zero, s.noun_root);
    Ok(())
}

fn root_states(g: &mut SuffixGraph, s: &States) {
    use PrimaryPos::*;

    g.set_root_state(Noun, None, s.noun_root);
    g.set_root_state(Noun, Some(SecondaryPos::ProperNoun), s.proper_noun_root);
    g.set_root_state(Adjective, None, s.adjective_root);
    g.set_root_state(Adverb, None, s.adverb_root);
    g.set_root_state(Pronoun, None, s.pronoun_root);
    g.set_root_state(Verb, None, s.verb_root);
    g.set_root_state(Numeral, None, s.numeral_root);
    for &(pos, state) in &s.closed_class {
        g.set_root_state(pos, None, state);
    }
}
