//! XML layout of the recipe database.
//!
//! ```xml
//! <recipes>
//!     <cake>
//!         <name>...</name>
//!         <stovetime>...</stovetime>
//!         <ingredients>
//!             <item>
//!                 <itemname>...</itemname>
//!                 <itemcount>...</itemcount>
//!                 <itemunit>...</itemunit>
//!             </item>
//!         </ingredients>
//!     </cake>
//! </recipes>
//! ```
//!
//! Output goes through serde. Input is read event by event so that text is
//! kept verbatim (including surrounding whitespace), every `<cake>` and
//! `<item>` is collected wherever it appears among its siblings, and the
//! root element name is ignored.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;

use crate::recipes::{Ingredient, Recipe, RecipeCollection};

#[derive(Debug, Serialize)]
#[serde(rename = "recipes")]
pub(crate) struct XmlRecipes {
    #[serde(rename = "cake")]
    cakes: Vec<XmlCake>,
}

#[derive(Debug, Serialize)]
struct XmlCake {
    name: String,
    stovetime: String,
    ingredients: XmlIngredients,
}

#[derive(Debug, Serialize)]
struct XmlIngredients {
    #[serde(rename = "item")]
    items: Vec<XmlItem>,
}

#[derive(Debug, Serialize)]
struct XmlItem {
    itemname: String,
    itemcount: String,
    itemunit: String,
}

impl From<&RecipeCollection> for XmlRecipes {
    fn from(collection: &RecipeCollection) -> Self {
        let cakes = collection
            .recipes
            .iter()
            .map(|recipe| XmlCake {
                name: recipe.name.clone(),
                stovetime: recipe.cook_time.clone(),
                ingredients: XmlIngredients {
                    items: recipe
                        .ingredients
                        .iter()
                        .map(|ingredient| XmlItem {
                            itemname: ingredient.name.clone(),
                            itemcount: ingredient.count.clone(),
                            itemunit: ingredient.unit.clone(),
                        })
                        .collect(),
                },
            })
            .collect();
        Self { cakes }
    }
}

/// Text-bearing elements that map onto a canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    StoveTime,
    ItemName,
    ItemCount,
    ItemUnit,
}

/// Open element, classified by where it sits in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Root,
    Cake,
    Ingredients,
    Item,
    Field(Field),
    Other,
}

/// Builds a [`RecipeCollection`] from XML events.
#[derive(Debug, Default)]
struct DocumentBuilder {
    open: Vec<Node>,
    collection: RecipeCollection,
    root_closed: bool,
}

impl DocumentBuilder {
    fn start(&mut self, element: &BytesStart<'_>) {
        let name = element.local_name();
        let node = match (self.open.last(), name.as_ref()) {
            (None, _) => Node::Root,
            (Some(Node::Root), b"cake") => {
                self.collection.recipes.push(Recipe::default());
                Node::Cake
            }
            (Some(Node::Cake), b"name") => Node::Field(Field::Name),
            (Some(Node::Cake), b"stovetime") => Node::Field(Field::StoveTime),
            (Some(Node::Cake), b"ingredients") => Node::Ingredients,
            (Some(Node::Ingredients), b"item") => {
                if let Some(recipe) = self.collection.recipes.last_mut() {
                    recipe.ingredients.push(Ingredient::default());
                }
                Node::Item
            }
            (Some(Node::Item), b"itemname") => Node::Field(Field::ItemName),
            (Some(Node::Item), b"itemcount") => Node::Field(Field::ItemCount),
            (Some(Node::Item), b"itemunit") => Node::Field(Field::ItemUnit),
            _ => Node::Other,
        };

        // A repeated field element replaces the earlier value.
        if let Node::Field(field) = node {
            if let Some(target) = self.field_mut(field) {
                target.clear();
            }
        }
        self.open.push(node);
    }

    fn end(&mut self) {
        self.open.pop();
        if self.open.is_empty() {
            self.root_closed = true;
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(&Node::Field(field)) = self.open.last() {
            if let Some(target) = self.field_mut(field) {
                target.push_str(text);
            }
        }
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        let recipe = self.collection.recipes.last_mut()?;
        match field {
            Field::Name => Some(&mut recipe.name),
            Field::StoveTime => Some(&mut recipe.cook_time),
            Field::ItemName => recipe.ingredients.last_mut().map(|i| &mut i.name),
            Field::ItemCount => recipe.ingredients.last_mut().map(|i| &mut i.count),
            Field::ItemUnit => recipe.ingredients.last_mut().map(|i| &mut i.unit),
        }
    }
}

/// Parses an XML database. Elements outside the known layout are skipped;
/// content after the root element is ignored.
pub(crate) fn parse_document(content: &str) -> Result<RecipeCollection, String> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);

    let mut builder = DocumentBuilder::default();

    while !builder.root_closed {
        let event = reader
            .read_event()
            .map_err(|e| format!("{e} at byte {}", reader.error_position()))?;

        match event {
            Event::Start(element) => builder.start(&element),
            Event::Empty(element) => {
                builder.start(&element);
                builder.end();
            }
            Event::End(_) => builder.end(),
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| e.to_string())?;
                builder.text(&text);
            }
            Event::CData(data) => {
                let data = data.decode().map_err(|e| e.to_string())?;
                builder.text(&data);
            }
            Event::Eof if builder.open.is_empty() => {
                return Err("document has no root element".to_string());
            }
            Event::Eof => return Err("unexpected end of document".to_string()),
            _ => {}
        }
    }

    Ok(builder.collection)
}
