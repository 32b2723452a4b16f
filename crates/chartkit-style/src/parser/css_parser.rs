//! Declaration, selector and stylesheet parsing using the `cssparser` crate.
//!
//! Values are never interpreted here. Each declaration value is tokenized
//! into [`LexicalUnit`]s and handed to the reader registered for the
//! property name; the reader decides what it accepts.

use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput, Token};

use crate::handlers::{CompoundOutcome, PropertyHandler};
use crate::logging::targets;
use crate::registry::{PropertyEntry, StyleRegistry};
use crate::rules::StyleRule;
use crate::selector::{Combinator, Selector, SelectorPart, TagMatch};
use crate::style::StyleDeclarations;
use crate::{Error, Result};

use super::{LexicalUnit, TokenStream, tokenize_value};

/// Options for declaration and stylesheet parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Log values that a registered reader rejected at `warn` instead of
    /// `debug`, naming the compound part that failed where there is one.
    pub report_malformed: bool,
}

impl ParseOptions {
    /// Options with malformed-value reporting turned on.
    pub fn reporting() -> Self {
        Self {
            report_malformed: true,
        }
    }
}

/// Parse a declaration list such as an element's inline `style` text.
///
/// Unknown properties and values their reader rejects are skipped; the
/// remaining declarations are applied in order, later ones replacing
/// earlier ones.
///
/// # Example
///
/// ```
/// use chartkit_style::keys::AXIS_LOCATION;
/// use chartkit_style::parser::parse_declarations;
/// use chartkit_style::registry;
/// use chartkit_style::types::constants::axis_location;
///
/// let declarations = parse_declarations(
///     "-x-chart-axis-location: secondary; unknown: 1",
///     registry::global(),
/// );
/// assert_eq!(declarations.len(), 1);
/// assert_eq!(
///     declarations.get(&AXIS_LOCATION),
///     Some(&axis_location::SECONDARY.into())
/// );
/// ```
pub fn parse_declarations(text: &str, registry: &StyleRegistry) -> StyleDeclarations {
    parse_declarations_with(text, registry, &ParseOptions::default())
}

/// [`parse_declarations`] with explicit options.
pub fn parse_declarations_with(
    text: &str,
    registry: &StyleRegistry,
    options: &ParseOptions,
) -> StyleDeclarations {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parse_declaration_list(&mut parser, registry, options)
}

/// Parse a stylesheet into rules.
///
/// A rule whose selector or block cannot be parsed is logged and skipped;
/// parsing resumes at the next rule. Rules are numbered in source order.
///
/// # Example
///
/// ```
/// use chartkit_style::parser::parse_stylesheet;
/// use chartkit_style::registry;
///
/// let css = "Axis { -x-chart-axis-type: domain primary 1; } \
///            Series.negative { -x-chart-negative-bar-color: blue; }";
/// let rules = parse_stylesheet(css, registry::global());
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules[0].declarations.len(), 3);
/// ```
pub fn parse_stylesheet(css: &str, registry: &StyleRegistry) -> Vec<StyleRule> {
    parse_stylesheet_with(css, registry, &ParseOptions::default())
}

/// [`parse_stylesheet`] with explicit options.
pub fn parse_stylesheet_with(
    css: &str,
    registry: &StyleRegistry,
    options: &ParseOptions,
) -> Vec<StyleRule> {
    let _span = tracing::debug_span!(target: targets::PARSER, "parse_stylesheet").entered();

    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = vec![];
    let mut order = 0u32;

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        match parse_rule(&mut parser, registry, options, order) {
            Ok(rule) => {
                rules.push(rule);
                order += 1;
            }
            Err(e) => {
                tracing::warn!(target: targets::PARSER, "CSS parse error: {}", e);
                skip_to_next_rule(&mut parser);
            }
        }
    }

    tracing::debug!(target: targets::PARSER, rules = rules.len(), "stylesheet parsed");
    rules
}

/// Parse a standalone selector such as `Chart > Axis.secondary`.
pub fn parse_selector(text: &str) -> Result<Selector> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let selector = parse_selector_tokens(&mut parser)?;

    parser.skip_whitespace();
    if !parser.is_exhausted() {
        return Err(Error::invalid_selector(text, "Unexpected trailing input"));
    }
    Ok(selector)
}

/// Parse a single rule: selector { declarations }
fn parse_rule(
    parser: &mut Parser<'_, '_>,
    registry: &StyleRegistry,
    options: &ParseOptions,
    order: u32,
) -> Result<StyleRule> {
    let location = parser.current_source_location();

    let mut selector_error = None;
    let selector = parser
        .parse_until_before(Delimiter::CurlyBracketBlock, |p| {
            parse_selector_tokens(p).map_err(|e| {
                selector_error = Some(e);
                p.new_custom_error(())
            })
        })
        .map_err(|_: CssParseError<'_, ()>| {
            selector_error.take().unwrap_or_else(|| {
                Error::parse("Failed to parse selector", location.line + 1, location.column)
            })
        })?;

    let declarations = match parser.next() {
        Ok(Token::CurlyBracketBlock) => parser
            .parse_nested_block(|block| {
                Ok::<_, CssParseError<'_, ()>>(parse_declaration_list(block, registry, options))
            })
            .map_err(|e| {
                Error::parse(
                    format!("Failed to parse declaration block: {:?}", e.kind),
                    e.location.line + 1,
                    e.location.column,
                )
            })?,
        _ => {
            return Err(Error::parse(
                format!("Expected '{{' after selector '{}'", selector),
                location.line + 1,
                location.column,
            ));
        }
    };

    Ok(StyleRule::new(selector, declarations, order))
}

/// Parse selector tokens up to the end of the parser's input.
fn parse_selector_tokens(parser: &mut Parser<'_, '_>) -> Result<Selector> {
    let mut parts = vec![];
    let mut combinators = vec![];
    let mut current = SelectorPart::default();
    let mut pending: Option<Combinator> = None;

    parser.skip_whitespace();

    loop {
        let token = match parser.next_including_whitespace() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        // A compound selector token after a combinator starts a new part.
        let starts_compound = matches!(
            token,
            Token::Ident(_) | Token::Delim('*') | Token::Delim('.') | Token::IDHash(_)
        );
        if starts_compound && let Some(combinator) = pending.take() {
            parts.push(std::mem::take(&mut current));
            combinators.push(combinator);
        }

        match token {
            Token::WhiteSpace(_) => {
                if !current.is_empty() && pending.is_none() {
                    pending = Some(Combinator::Descendant);
                }
            }

            Token::Delim('>') => {
                if current.is_empty() {
                    return Err(Error::invalid_selector(">", "Combinator without a selector"));
                }
                pending = Some(Combinator::Child);
            }

            Token::Ident(name) => {
                if !current.is_empty() {
                    return Err(Error::invalid_selector(
                        name.to_string(),
                        "Type selector must come first",
                    ));
                }
                current.tag = Some(TagMatch::Named(name.to_string()));
            }

            Token::Delim('*') => {
                if !current.is_empty() {
                    return Err(Error::invalid_selector("*", "Type selector must come first"));
                }
                current.tag = Some(TagMatch::Any);
            }

            Token::Delim('.') => {
                let class = match parser.next_including_whitespace() {
                    Ok(Token::Ident(class)) => class.to_string(),
                    _ => {
                        return Err(Error::invalid_selector(".", "Expected class name after '.'"));
                    }
                };
                current.classes.push(class);
            }

            Token::IDHash(id) => {
                if current.id.is_some() {
                    return Err(Error::invalid_selector(
                        format!("#{}", id),
                        "Only one id per selector part",
                    ));
                }
                current.id = Some(id.to_string());
            }

            Token::Colon => {
                return Err(Error::invalid_selector(":", "Pseudo-classes are not supported"));
            }

            Token::Comma => {
                return Err(Error::invalid_selector(",", "Selector lists are not supported"));
            }

            other => {
                return Err(Error::invalid_selector(
                    format!("{:?}", other),
                    "Unexpected token in selector",
                ));
            }
        }
    }

    if pending == Some(Combinator::Child) {
        return Err(Error::invalid_selector(">", "Combinator without a selector"));
    }
    if !current.is_empty() {
        parts.push(current);
    }
    if parts.is_empty() {
        return Err(Error::invalid_selector("", "Empty selector"));
    }

    Ok(Selector { parts, combinators })
}

/// Parse `name: value` declarations until the parser is exhausted.
fn parse_declaration_list(
    parser: &mut Parser<'_, '_>,
    registry: &StyleRegistry,
    options: &ParseOptions,
) -> StyleDeclarations {
    let mut declarations = StyleDeclarations::new();

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        // Empty declarations
        if parser.try_parse(|p| p.expect_semicolon()).is_ok() {
            continue;
        }

        let name = match parser.expect_ident() {
            Ok(name) => name.to_string(),
            Err(e) => {
                tracing::debug!(target: targets::PARSER, "Expected property name: {:?}", e.kind);
                skip_declaration(parser);
                continue;
            }
        };

        if parser.expect_colon().is_err() {
            tracing::debug!(target: targets::PARSER, property = %name, "Expected ':'");
            skip_declaration(parser);
            continue;
        }

        let units = parser.parse_until_before(Delimiter::Semicolon, |p| tokenize_value(p));
        let _ = parser.try_parse(|p| p.expect_semicolon());

        let units = match units {
            Ok(units) => units,
            Err(e) => {
                tracing::debug!(
                    target: targets::PARSER,
                    property = %name,
                    "Failed to tokenize value: {:?}",
                    e.kind
                );
                continue;
            }
        };

        let Some(entry) = registry.lookup(&name) else {
            tracing::debug!(target: targets::PARSER, property = %name, "Unknown property");
            continue;
        };

        let mut stream = TokenStream::new(&units);
        match entry.handler().parse(&mut stream) {
            Some(values) => declarations.extend(values),
            None => report_rejected(entry, &units, options),
        }
    }

    declarations
}

fn report_rejected(entry: &PropertyEntry, units: &[LexicalUnit], options: &ParseOptions) {
    if !options.report_malformed || units.is_empty() {
        tracing::debug!(
            target: targets::PARSER,
            property = entry.name(),
            "Value not recognized"
        );
        return;
    }

    let value = units
        .iter()
        .map(LexicalUnit::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    if let PropertyHandler::Compound(compound) = entry.handler()
        && let CompoundOutcome::Malformed { key, position } =
            compound.diagnose(&mut TokenStream::new(units))
    {
        tracing::warn!(
            target: targets::PARSER,
            property = entry.name(),
            %key,
            position,
            "Malformed value '{}'",
            value
        );
        return;
    }

    tracing::warn!(
        target: targets::PARSER,
        property = entry.name(),
        "Malformed value '{}'",
        value
    );
}

/// Skip to the end of the current declaration (error recovery).
fn skip_declaration(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Err(_) => return,
            Ok(Token::CloseCurlyBracket) => return,
            _ => {}
        }
    }
}

/// Skip to the next rule (error recovery).
fn skip_to_next_rule(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::CurlyBracketBlock) => {
                // Nested tokens are skipped with the block.
                return;
            }
            Ok(Token::CloseCurlyBracket) | Err(_) => return,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{
        AXIS_DIMENSION, AXIS_LOCATION, AXIS_ORDER, AXIS_POSITION, CHART_AREA_STYLE,
        GRADIENT_COLOR, MARKER_HEIGHT, NEGATIVE_BAR_COLOR,
    };
    use crate::selector::Specificity;
    use crate::types::constants::{area_style, axis_dimension, axis_location, axis_position};
    use crate::types::{ColorValue, NumericValue, StyleValue, ValuePair};

    fn registry() -> StyleRegistry {
        StyleRegistry::chart()
    }

    #[test]
    fn parse_axis_type_declaration() {
        let declarations = parse_declarations("-x-chart-axis-type: domain primary 1", &registry());
        assert_eq!(declarations.len(), 3);
        assert_eq!(
            declarations.get(&AXIS_DIMENSION),
            Some(&axis_dimension::DOMAIN.into())
        );
        assert_eq!(
            declarations.get(&AXIS_POSITION),
            Some(&axis_position::PRIMARY.into())
        );
        assert_eq!(
            declarations.get(&AXIS_ORDER),
            Some(&NumericValue::number(1.0).into())
        );
    }

    #[test]
    fn malformed_compound_sets_nothing() {
        let declarations = parse_declarations(
            "-x-chart-axis-type: primary domain 1; -x-chart-marker-height: 4px",
            &registry(),
        );
        assert_eq!(declarations.len(), 1);
        assert!(declarations.contains(&MARKER_HEIGHT));

        let reported = parse_declarations_with(
            "-x-chart-axis-type: domain secondary",
            &registry(),
            &ParseOptions::reporting(),
        );
        assert!(reported.is_empty());
    }

    #[test]
    fn parse_color_properties() {
        let declarations = parse_declarations(
            "-x-chart-gradient-color: rgb(0,255,0) rgb(255,0,0); \
             -x-chart-negative-bar-color: rgb(255, 192, 203);",
            &registry(),
        );
        assert_eq!(
            declarations.get(&GRADIENT_COLOR),
            Some(&StyleValue::from(ValuePair::new(
                ColorValue::rgb(0, 255, 0).into(),
                ColorValue::RED.into(),
            )))
        );
        assert_eq!(
            declarations.get(&NEGATIVE_BAR_COLOR),
            Some(&ColorValue::rgb(255, 192, 203).into())
        );
    }

    #[test]
    fn later_declarations_win() {
        let declarations = parse_declarations(
            "-x-chart-axis-location: primary; -X-CHART-AXIS-LOCATION: Secondary",
            &registry(),
        );
        assert_eq!(
            declarations.get(&AXIS_LOCATION),
            Some(&axis_location::SECONDARY.into())
        );
    }

    #[test]
    fn recovers_from_broken_declarations() {
        let declarations = parse_declarations(
            ";; 12: nonsense; -x-chart-area-style multi; -x-chart-area-style: multi; \
             -x-chart-marker-height: 4 5; -x-chart-axis-order: {1}",
            &registry(),
        );
        assert_eq!(declarations.len(), 1);
        assert_eq!(
            declarations.get(&CHART_AREA_STYLE),
            Some(&area_style::MULTI.into())
        );
    }

    #[test]
    fn empty_input() {
        assert!(parse_declarations("", &registry()).is_empty());
        assert!(parse_stylesheet("  /* nothing */ ", &registry()).is_empty());
    }

    #[test]
    fn parse_simple_selectors() {
        let selector = parse_selector("Axis").unwrap();
        assert_eq!(selector.parts.len(), 1);
        assert_eq!(
            selector.parts[0].tag,
            Some(TagMatch::Named("Axis".into()))
        );

        let selector = parse_selector("Series.negative#s1").unwrap();
        assert_eq!(selector.parts[0].classes, vec!["negative".to_string()]);
        assert_eq!(selector.parts[0].id.as_deref(), Some("s1"));

        let selector = parse_selector("*").unwrap();
        assert_eq!(selector.parts[0].tag, Some(TagMatch::Any));
    }

    #[test]
    fn parse_combinators() {
        let selector = parse_selector("Chart Plot > Axis").unwrap();
        assert_eq!(selector.parts.len(), 3);
        assert_eq!(
            selector.combinators,
            vec![Combinator::Descendant, Combinator::Child]
        );

        let selector = parse_selector(".a .b").unwrap();
        assert_eq!(selector.parts.len(), 2);
        assert_eq!(selector.combinators, vec![Combinator::Descendant]);

        let selector = parse_selector("Plot>Series").unwrap();
        assert_eq!(selector.combinators, vec![Combinator::Child]);
        assert_eq!(selector.to_string(), "Plot > Series");
    }

    #[test]
    fn reject_invalid_selectors() {
        assert!(parse_selector("").is_err());
        assert!(parse_selector("> Axis").is_err());
        assert!(parse_selector("Axis >").is_err());
        assert!(parse_selector("Axis:hover").is_err());
        assert!(parse_selector("Axis, Series").is_err());
        assert!(parse_selector("Axis.").is_err());
    }

    #[test]
    fn parse_stylesheet_rules() {
        let css = r#"
            Axis { -x-chart-axis-type: domain primary 1; }
            Axis.secondary { -x-chart-axis-type: range secondary 2; }
            #main > Series { -x-chart-marker-height: 6px; }
        "#;
        let rules = parse_stylesheet(css, &registry());
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].order, 0);
        assert_eq!(rules[1].specificity, Specificity(0, 1, 1));
        assert_eq!(rules[2].order, 2);
        assert_eq!(
            rules[2].declarations.get(&MARKER_HEIGHT),
            Some(&NumericValue::px(6.0).into())
        );
    }

    #[test]
    fn stylesheet_skips_bad_rules() {
        let css = "Axis:hover { color: red; } Series { color: blue; } Plot { color: green }";
        let rules = parse_stylesheet(css, &registry());
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].order, 0);
        assert_eq!(rules[1].order, 1);
        assert_eq!(rules[1].selector.to_string(), "Plot");
    }

    #[test]
    fn unparseable_stylesheet_yields_no_rules() {
        for css in ["{{{", "Axis:hover { color: red }", "Axis", "Axis. { color: red }"] {
            assert!(parse_stylesheet(css, &registry()).is_empty(), "{}", css);
        }
    }
}
