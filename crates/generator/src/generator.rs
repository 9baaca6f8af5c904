//! Container class assembly

use contract_gen_common::{GeneratorOptions, MethodKind};
use contract_gen_reflect::{full_method_list, full_service_chain, is_view_method};
use prost_reflect::{MessageDescriptor, MethodDescriptor, ServiceDescriptor};

use crate::messages::used_messages;
use crate::naming;
use crate::printer::IndentPrinter;

const SERVICE_FIELD_NAME: &str = "__ServiceName";

/// Generates the container class for one service
///
/// The container aggregates the service's marshallers, per-method metadata,
/// descriptor accessors, and the optional server base class, stub, and
/// reference-state sections. One generator instance owns one private output
/// buffer and is consumed by [`generate`](ContractGenerator::generate).
pub struct ContractGenerator {
    service: ServiceDescriptor,
    options: GeneratorOptions,
    methods: Vec<MethodDescriptor>,
    used_messages: Vec<MessageDescriptor>,
    printer: IndentPrinter,
}

impl ContractGenerator {
    pub fn new(service: ServiceDescriptor, options: GeneratorOptions) -> Self {
        let methods = full_method_list(&service);
        let used_messages = used_messages(&methods);
        Self {
            service,
            options,
            methods,
            used_messages,
            printer: IndentPrinter::new(),
        }
    }

    /// Assemble the container class and return the generated text
    ///
    /// Sections are emitted in a fixed order; the optional ones are gated by
    /// the generation switches. `None` is only possible if nothing was
    /// buffered at all.
    pub fn generate(mut self) -> Option<String> {
        self.printer.print_line(&format!(
            "{} static partial class {}",
            self.access_level(),
            naming::container_class_name(&self.service)
        ));
        self.printer.print_line("{");
        self.printer.indent();

        // The ordered section list is data so the block-ordering contract
        // stays visible in one place.
        let sections: [(bool, fn(&mut Self)); 8] = [
            (true, Self::service_name_constant),
            (true, Self::marshallers),
            (true, Self::methods_table),
            (true, Self::descriptors),
            (self.options.generate_contract, Self::contract_base_class),
            (self.options.generate_contract, Self::bind_service_method),
            (self.options.generate_stub, Self::stub_class),
            (self.options.generate_reference, Self::reference_state_class),
        ];

        let mut first = true;
        for (enabled, emit) in sections {
            if !enabled {
                continue;
            }
            if !first {
                self.printer.blank();
            }
            emit(&mut self);
            first = false;
        }

        self.printer.outdent();
        self.printer.print_line("}");

        if self.printer.is_empty() {
            None
        } else {
            Some(self.printer.finish())
        }
    }

    fn access_level(&self) -> &'static str {
        if self.options.internal_access {
            "internal"
        } else {
            "public"
        }
    }

    fn service_name_constant(&mut self) {
        self.printer.print_line(&format!(
            "static readonly string {} = \"{}\";",
            SERVICE_FIELD_NAME,
            self.service.full_name()
        ));
    }

    /// One static codec per used message, in collector order
    ///
    /// The codec delegates to the message type's own serialize/parse
    /// operations; the container only wires identity and naming.
    fn marshallers(&mut self) {
        self.printer.print_line("#region Marshallers");
        for message in &self.used_messages {
            let field_name = naming::marshaller_field_name(message);
            let type_name = naming::message_type_name(message);
            self.printer.print_line(&format!(
                "static readonly contract::Marshaller<{t}> {f} = contract::Marshallers.Create((arg) => global::Google.Protobuf.MessageExtensions.ToByteArray(arg), {t}.Parser.ParseFrom);",
                t = type_name,
                f = field_name,
            ));
        }
        self.printer.print_line("#endregion");
    }

    /// One static method descriptor per method, in declaration order
    fn methods_table(&mut self) {
        self.printer.print_line("#region Methods");
        for method in &self.methods {
            let kind = MethodKind::from_view_flag(is_view_method(method));
            let pair = format!(
                "{}, {}",
                naming::message_type_name(&method.input()),
                naming::message_type_name(&method.output())
            );
            self.printer.print_line(&format!(
                "static readonly contract::Method<{pair}> {field} = new contract::Method<{pair}>(",
                pair = pair,
                field = naming::method_field_name(method),
            ));
            self.printer.indent();
            self.printer
                .print_line(&format!("contract::MethodType.{},", kind));
            self.printer.print_line(&format!("{},", SERVICE_FIELD_NAME));
            self.printer.print_line(&format!("\"{}\",", method.name()));
            self.printer.print_line(&format!(
                "{},",
                naming::marshaller_field_name(&method.input())
            ));
            self.printer.print_line(&format!(
                "{});",
                naming::marshaller_field_name(&method.output())
            ));
            self.printer.outdent();
        }
        self.printer.print_line("#endregion");
    }

    fn descriptors(&mut self) {
        self.printer.print_line("#region Descriptors");
        self.service_descriptor_property();
        self.printer.blank();
        self.all_service_descriptors_property();
        self.printer.print_line("#endregion");
    }

    /// The service's own reflected descriptor, recovered by indexing into the
    /// owning file's service list
    fn service_descriptor_property(&mut self) {
        self.printer.print_line(
            "public static global::Google.Protobuf.Reflection.ServiceDescriptor Descriptor",
        );
        self.printer.print_line("{");
        self.printer.indent();
        self.printer.print_line(&format!(
            "get {{ return {}.Descriptor.Services[{}]; }}",
            naming::reflection_class_name(&self.service.parent_file()),
            self.service.index()
        ));
        self.printer.outdent();
        self.printer.print_line("}");
    }

    /// Reflected descriptors for the whole base-service chain, in chain order
    fn all_service_descriptors_property(&mut self) {
        self.printer.print_line(
            "public static global::System.Collections.Generic.IReadOnlyList<global::Google.Protobuf.Reflection.ServiceDescriptor> Descriptors",
        );
        self.printer.print_line("{");
        self.printer.indent();
        self.printer.print_line("get");
        self.printer.print_line("{");
        self.printer.indent();
        self.printer.print_line(
            "return new global::System.Collections.Generic.List<global::Google.Protobuf.Reflection.ServiceDescriptor>()",
        );
        self.printer.print_line("{");
        self.printer.indent();
        for member in full_service_chain(&self.service) {
            self.printer.print_line(&format!(
                "{}.Descriptor.Services[{}],",
                naming::reflection_class_name(&member.parent_file()),
                member.index()
            ));
        }
        self.printer.outdent();
        self.printer.print_line("};");
        self.printer.outdent();
        self.printer.print_line("}");
        self.printer.outdent();
        self.printer.print_line("}");
    }

    /// Overridable server surface; un-overridden members fail fast
    fn contract_base_class(&mut self) {
        self.printer.print_line(&format!(
            "/// <summary>Base class for the contract of {}</summary>",
            self.service.name()
        ));
        self.printer.print_line(&format!(
            "public abstract partial class {}",
            naming::server_base_class_name(&self.service)
        ));
        self.printer.print_line("{");
        self.printer.indent();
        let mut first = true;
        for method in &self.methods {
            if !first {
                self.printer.blank();
            }
            first = false;
            self.printer.print_line(&format!(
                "public virtual {} {}({} input)",
                naming::message_type_name(&method.output()),
                method.name(),
                naming::message_type_name(&method.input())
            ));
            self.printer.print_line("{");
            self.printer.indent();
            self.printer
                .print_line("throw new global::System.NotImplementedException();");
            self.printer.outdent();
            self.printer.print_line("}");
        }
        self.printer.outdent();
        self.printer.print_line("}");
    }

    /// Routing glue: method field name to base-class member, per method
    fn bind_service_method(&mut self) {
        self.printer.print_line(&format!(
            "public static contract::ServerServiceDefinition BindService({} serviceImpl)",
            naming::server_base_class_name(&self.service)
        ));
        self.printer.print_line("{");
        self.printer.indent();
        self.printer
            .print_line("return contract::ServerServiceDefinition.CreateBuilder()");
        self.printer.indent();

        let mut links = vec![".AddDescriptors(Descriptors)".to_owned()];
        links.extend(self.methods.iter().map(|method| {
            format!(
                ".AddMethod({}, serviceImpl.{})",
                naming::method_field_name(method),
                method.name()
            )
        }));

        let last = links.len() - 1;
        for (position, link) in links.iter().enumerate() {
            if position == last {
                self.printer.print_line(&format!("{}.Build();", link));
            } else {
                self.printer.print_line(link);
            }
        }

        self.printer.outdent();
        self.printer.outdent();
        self.printer.print_line("}");
    }

    /// Client-side stub; the call mechanism stays behind the stub factory
    fn stub_class(&mut self) {
        let stub_name = format!("{}Stub", self.service.name());
        self.printer.print_line(&format!("public class {}", stub_name));
        self.printer.print_line("{");
        self.printer.indent();
        self.printer
            .print_line("readonly contract::IMethodStubFactory __factory;");
        self.printer.blank();
        self.printer.print_line(&format!(
            "public {}(contract::IMethodStubFactory factory)",
            stub_name
        ));
        self.printer.print_line("{");
        self.printer.indent();
        self.printer.print_line("__factory = factory;");
        self.printer.outdent();
        self.printer.print_line("}");

        for method in &self.methods {
            self.printer.blank();
            self.printer.print_line(&format!(
                "public contract::IMethodStub<{}, {}> {}",
                naming::message_type_name(&method.input()),
                naming::message_type_name(&method.output()),
                method.name()
            ));
            self.printer.print_line("{");
            self.printer.indent();
            self.printer.print_line(&format!(
                "get {{ return __factory.Create({}); }}",
                naming::method_field_name(method)
            ));
            self.printer.outdent();
            self.printer.print_line("}");
        }

        self.printer.outdent();
        self.printer.print_line("}");
    }

    /// Per-target method reference holder for calling code
    fn reference_state_class(&mut self) {
        self.printer.print_line(&format!(
            "public class {}ReferenceState : contract::ContractReferenceState",
            self.service.name()
        ));
        self.printer.print_line("{");
        self.printer.indent();
        for method in &self.methods {
            self.printer.print_line(&format!(
                "internal contract::MethodReference<{}, {}> {} {{ get; set; }}",
                naming::message_type_name(&method.input()),
                naming::message_type_name(&method.output()),
                method.name()
            ));
        }
        self.printer.outdent();
        self.printer.print_line("}");
    }
}
