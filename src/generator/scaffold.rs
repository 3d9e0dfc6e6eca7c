//! VCV Rack module scaffold generation.
//!
//! Produces one C++ translation unit holding the module struct (param,
//! input and output enums), the widget struct (panel, corner screws and one
//! construction call per placed component) and the model registration.

// Allow format! appended to String - more readable for building source text
#![allow(clippy::format_push_string)]

use anyhow::Result;
use tracing::warn;

use crate::config::TemplateConfig;
use crate::generator::identifier::identifiers_of_kind;
use crate::models::{Component, ComponentKind};
use crate::units::format_number;

/// Indentation of enum blocks inside the module struct.
const STRUCT_INDENT: usize = 4;
/// Indentation of statements inside the widget constructor.
const BODY_INDENT: usize = 8;

/// Generates the C++ scaffold for one module.
pub struct ScaffoldGenerator<'a> {
    module_name: &'a str,
    components: &'a [Component],
    template: &'a TemplateConfig,
}

impl<'a> ScaffoldGenerator<'a> {
    /// Creates a new generator.
    pub const fn new(
        module_name: &'a str,
        components: &'a [Component],
        template: &'a TemplateConfig,
    ) -> Self {
        Self {
            module_name,
            components,
            template,
        }
    }

    /// Struct name of the module, e.g. `Viral_Modules_Mult`.
    pub fn struct_name(&self) -> String {
        format!("{}_{}", self.template.struct_prefix, self.module_name)
    }

    /// Generates the full source text, ending with a newline.
    pub fn generate(&self) -> Result<String> {
        let name = self.struct_name();
        let module = self.module_name;
        let mut output = String::new();

        output.push_str("// This file was auto-generated by panelforge\n");
        output.push_str("#include \"plugin.hpp\"\n\n");

        output.push_str(&format!("struct {name} : Module {{\n"));
        output.push_str(&indent(&self.generate_enum(ComponentKind::Param)?, STRUCT_INDENT));
        output.push_str("\n\n");
        output.push_str(&indent(&self.generate_enum(ComponentKind::Input)?, STRUCT_INDENT));
        output.push_str("\n\n");
        output.push_str(&indent(&self.generate_enum(ComponentKind::Output)?, STRUCT_INDENT));
        output.push_str("\n\n");
        output.push_str(&format!("    {name}() {{\n"));
        output.push_str("        config(NUM_PARAMS, NUM_INPUTS, NUM_OUTPUTS, 0);\n");
        output.push_str("    }\n\n");
        output.push_str("    void process(const ProcessArgs &args) override {\n\n");
        output.push_str("    }\n");
        output.push_str("};\n\n\n");

        output.push_str(&format!("struct {name}Widget : ModuleWidget {{\n"));
        output.push_str(&format!("    {name}Widget({name} *module) {{\n"));
        output.push_str("        setModule(module);\n");
        output.push_str(&format!(
            "        setPanel(APP->window->loadSvg(asset::plugin(pluginInstance, \"res/{module}.svg\")));\n\n"
        ));
        output.push_str(&generate_screws());
        output.push('\n');

        output.push_str("        // Params\n");
        output.push_str(&indent(&self.generate_constructions(ComponentKind::Param)?, BODY_INDENT));
        output.push_str("\n\n");
        output.push_str("        // Inputs\n");
        output.push_str(&indent(&self.generate_constructions(ComponentKind::Input)?, BODY_INDENT));
        output.push_str("\n\n");
        output.push_str("        // Outputs\n");
        output.push_str(&indent(&self.generate_constructions(ComponentKind::Output)?, BODY_INDENT));
        output.push('\n');
        output.push_str("    }\n");
        output.push_str("};\n\n\n");

        output.push_str(&format!(
            "Model *model{name} = createModel<{name}, {name}Widget>(\"{}-{module}\");\n",
            self.template.model_slug_prefix
        ));

        Ok(output)
    }

    /// Generates one id enum with its trailing count sentinel.
    ///
    /// Returns an empty string for kinds without an enum.
    pub fn generate_enum(&self, kind: ComponentKind) -> Result<String> {
        let (enum_name, sentinel) = match kind {
            ComponentKind::Param => ("ParamIds", "NUM_PARAMS"),
            ComponentKind::Input => ("InputIds", "NUM_INPUTS"),
            ComponentKind::Output => ("OutputIds", "NUM_OUTPUTS"),
            ComponentKind::Light | ComponentKind::Custom | ComponentKind::Unknown => {
                return Ok(String::new())
            }
        };

        let mut block = format!("enum {enum_name} {{\n");
        for (_, id) in identifiers_of_kind(self.components, kind)? {
            block.push_str(&format!("    {id},\n"));
        }
        block.push_str(&format!("    {sentinel}\n}};"));
        Ok(block)
    }

    /// Generates the construction statements for one kind, one per line.
    ///
    /// Components without a center point keep their enum entry but get no
    /// statement.
    pub fn generate_constructions(&self, kind: ComponentKind) -> Result<String> {
        let (call, factory, widget) = match kind {
            ComponentKind::Param => ("addParam", "createParamCentered", "RoundBlackKnob"),
            ComponentKind::Input => ("addInput", "createInputCentered", "PJ301MPort"),
            ComponentKind::Output => ("addOutput", "createOutputCentered", "PJ301MPort"),
            ComponentKind::Light | ComponentKind::Custom | ComponentKind::Unknown => {
                return Ok(String::new())
            }
        };
        let name = self.struct_name();

        let mut statements = Vec::new();
        for (component, id) in identifiers_of_kind(self.components, kind)? {
            let Some(center) = component.center else {
                warn!(
                    component = %component.name,
                    "no center point, skipping {call} statement"
                );
                continue;
            };
            statements.push(format!(
                "{call}({factory}<{widget}>(mm2px(Vec({}, {})), module, {name}::{id}));",
                format_number(center.x),
                format_number(center.y),
            ));
        }
        Ok(statements.join("\n"))
    }
}

/// The four corner screws.
fn generate_screws() -> String {
    const SCREWS: [&str; 4] = [
        "Vec(RACK_GRID_WIDTH, 0)",
        "Vec(box.size.x - 2 * RACK_GRID_WIDTH, 0)",
        "Vec(RACK_GRID_WIDTH, RACK_GRID_HEIGHT - RACK_GRID_WIDTH)",
        "Vec(box.size.x - 2 * RACK_GRID_WIDTH, RACK_GRID_HEIGHT - RACK_GRID_WIDTH)",
    ];

    SCREWS
        .iter()
        .map(|position| format!("        addChild(createWidget<ScrewSilver>({position}));\n"))
        .collect()
}

/// Prefixes every line (empty ones included) with `count` spaces.
fn indent(text: &str, count: usize) -> String {
    let pad = " ".repeat(count);
    text.split('\n')
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
