//! Curated word data for legal-document analysis.
//!
//! Holds the terminology table (canonical jargon term → plain-language
//! meaning), the classifier category keyword lists, and the key-term
//! keywords used for document metadata.
//!
//! Order matters for `LEGAL_TERMS` and `CLASSIFIER_CATEGORIES`: the
//! dictionary iterates terms in definition order, and classification ties
//! break toward the earlier-declared category. Both are plain slices so
//! that order is part of the data, not an accident of hashing.

/// Legal jargon terms with their plain-language meanings.
///
/// Definition order here is the dictionary's iteration order.
pub const LEGAL_TERMS: &[(&str, &str)] = &[
    ("indemnify", "to compensate for harm or loss"),
    ("indemnity", "security against legal responsibility for loss"),
    ("breach", "violation of a duty or agreement"),
    ("liability", "legal responsibility for one's acts or omissions"),
    ("covenant", "a formal promise within an agreement"),
    ("consideration", "something of value exchanged to make a contract binding"),
    ("arbitration", "settling a dispute through a neutral third party instead of court"),
    ("mediation", "assisted negotiation to settle a dispute without a binding ruling"),
    ("litigation", "the process of taking a dispute to court"),
    ("jurisdiction", "the authority of a court to hear a case"),
    ("plaintiff", "the party who starts a lawsuit"),
    ("defendant", "the party being sued or accused"),
    ("tort", "a civil wrong causing harm or loss"),
    ("negligence", "failure to take reasonable care"),
    ("damages", "money awarded to compensate for loss or injury"),
    ("liquidated damages", "a fixed sum agreed in advance as compensation for a breach"),
    ("injunction", "a court order requiring someone to do or stop doing something"),
    ("subpoena", "an order to appear in court or produce evidence"),
    ("deposition", "sworn out-of-court testimony recorded for later use"),
    ("affidavit", "a written statement confirmed by oath"),
    ("fiduciary", "a person bound to act in another's best interest"),
    ("escrow", "money or property held by a third party until conditions are met"),
    ("lien", "a legal claim on property as security for a debt"),
    ("easement", "a right to use another person's land for a specific purpose"),
    ("encumbrance", "a claim or restriction attached to property"),
    ("estoppel", "being barred from contradicting one's earlier statement or conduct"),
    ("force majeure", "unforeseeable events that excuse performance of a contract"),
    ("severability", "keeping the rest of a contract valid if one part is struck down"),
    ("waiver", "voluntarily giving up a right or claim"),
    ("novation", "replacing a party or obligation in a contract with a new one"),
    ("rescind", "to cancel a contract and restore the parties to their prior positions"),
    ("restitution", "returning a benefit to avoid unjust enrichment"),
    ("garnishment", "withholding wages or funds to pay a debt"),
    ("subrogation", "one party taking over another's legal claim after paying their loss"),
    ("promissory note", "a written promise to pay a stated sum"),
    ("power of attorney", "written authority to act on another person's behalf"),
    ("statute of limitations", "the deadline for bringing a legal claim"),
    ("intestate", "dying without a valid will"),
    ("probate", "the court process of proving a will and settling an estate"),
    ("codicil", "an amendment to an existing will"),
    ("trustee", "a person who manages property for someone else's benefit"),
    ("usury", "lending money at an unlawfully high interest rate"),
    ("per stirpes", "dividing an inheritance by family branch"),
    ("pro rata", "in proportion to each party's share"),
    ("pro bono", "legal work done without charge"),
    ("quid pro quo", "something given in exchange for something else"),
    ("de facto", "true in practice even if not by law"),
    ("de jure", "established by law"),
    ("ex parte", "done for one party without notice to the other"),
    ("habeas corpus", "a court order to justify holding someone in custody"),
    ("amicus curiae", "an outside party assisting the court with information"),
    ("writ", "a formal written court order"),
    ("remand", "sending a case back to a lower court"),
    ("vicarious liability", "responsibility for another person's actions"),
    ("without prejudice", "without giving up any rights or claims"),
    ("null and void", "having no legal force"),
    ("hereinafter", "from this point on in the document"),
    ("notwithstanding", "in spite of what was said elsewhere"),
];

/// Document categories with their scoring keywords.
///
/// Declaration order breaks classification ties: when two categories score
/// equally, the earlier one wins.
pub const CLASSIFIER_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Employment Agreement",
        &[
            "employment",
            "employee",
            "employer",
            "salary",
            "wages",
            "job",
            "work",
            "hire",
            "firing",
            "termination",
            "benefits",
        ],
    ),
    (
        "Service Agreement",
        &[
            "service",
            "services",
            "provider",
            "client",
            "deliverables",
            "scope",
            "work",
        ],
    ),
    (
        "Non-Disclosure Agreement",
        &[
            "confidential",
            "non-disclosure",
            "proprietary",
            "trade secret",
            "confidentiality",
        ],
    ),
    (
        "Sales Agreement",
        &[
            "purchase", "sale", "buy", "sell", "goods", "products", "delivery", "payment",
        ],
    ),
    (
        "Lease Agreement",
        &[
            "lease", "rent", "tenant", "landlord", "property", "premises", "monthly",
        ],
    ),
    (
        "General Contract",
        &[
            "contract",
            "agreement",
            "parties",
            "terms",
            "conditions",
            "obligations",
            "breach",
            "performance",
        ],
    ),
];

/// Common legal keywords surfaced as a document's key terms.
pub const KEY_TERM_KEYWORDS: &[&str] = &[
    "agreement",
    "contract",
    "party",
    "parties",
    "obligation",
    "liability",
    "terms",
    "conditions",
    "payment",
    "delivery",
    "breach",
    "termination",
    "confidentiality",
    "intellectual property",
    "damages",
    "indemnity",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_terms_are_well_formed() {
        assert!(!LEGAL_TERMS.is_empty());
        for (term, meaning) in LEGAL_TERMS {
            assert!(!term.trim().is_empty());
            assert!(!meaning.trim().is_empty());
        }
    }

    #[test]
    fn legal_terms_have_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for (term, _) in LEGAL_TERMS {
            assert!(seen.insert(term.to_lowercase()), "duplicate term: {term}");
        }
    }

    #[test]
    fn category_order_starts_with_employment() {
        assert_eq!(CLASSIFIER_CATEGORIES[0].0, "Employment Agreement");
        assert_eq!(
            CLASSIFIER_CATEGORIES.last().unwrap().0,
            "General Contract"
        );
    }
}
