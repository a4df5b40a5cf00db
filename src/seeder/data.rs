// Fixed sample pools for synthetic people

pub const NO_INTERNET: &str = "Não usa internet";

pub const NAMES: &[&str] = &[
    "João Silva", "Maria Souza", "Ana Costa", "Pedro Lima", "Lucas Oliveira", "Juliana Santos",
    "Rafael Pereira", "Fernanda Gomes", "André Almeida", "Carla Ribeiro", "Bruno Fernandes",
    "Patrícia Carvalho", "Rodrigo Azevedo", "Gabriela Rocha", "Thiago Martins", "Camila Dias",
    "Felipe Nogueira", "Larissa Mendes", "Daniel Barbosa", "Amanda Castro", "Gustavo Melo",
    "Beatriz Pinto", "Leonardo Cardoso", "Carolina Faria", "Matheus Correia", "Vanessa Teixeira",
    "Diego Monteiro", "Letícia Duarte", "Vinícius Brito", "Isabela Freitas", "Eduardo Rezende",
    "Renata Tavares", "Marcelo Paiva", "Tatiane Moura", "Caio Moreira", "Priscila Lopes",
    "Alexandre Vieira", "Débora Lima", "Henrique Fernandes", "Sabrina Souza", "Ricardo Santos",
    "Bianca Oliveira", "Maurício Correia", "Natália Barbosa", "Sérgio Costa", "Adriana Almeida",
    "Rogério Martins", "Érica Ribeiro", "Fábio Nunes", "Daniela Castro", "Fernando Duarte",
    "Luciana Azevedo", "Cristiano Tavares", "Patrícia Nogueira", "Vitor Rocha", "Kelly Moura",
    "Roberto Mendes", "Juliane Brito", "Marcos Cardoso", "Paula Reis", "Rafaela Gomes",
];

pub const CITIES: &[&str] = &[
    "São Paulo", "Rio de Janeiro", "Belo Horizonte", "Salvador", "Fortaleza",
    "Curitiba", "Recife", "Porto Alegre", "Manaus", "Belém", "Goiânia",
    "Florianópolis", "Vitória", "Natal", "Campo Grande", "João Pessoa",
    "Maceió", "Teresina", "São Luís", "Aracaju", "Cuiabá", "Londrina",
    "Ribeirão Preto", "Uberlândia", "Santos", "Sorocaba", "Campinas",
    "Juiz de Fora", "Pelotas", "Caxias do Sul", "Maringá", "Foz do Iguaçu",
    "Blumenau", "Joinville", "Itajaí", "Niterói", "Volta Redonda", "Taubaté",
    "Bauru", "Caruaru", "Mossoró", "Macapá", "Boa Vista", "Palmas",
    "Criciúma", "Petrolina", "Anápolis", "Chapecó", "Vila Velha", "Franca",
    "Barueri", "Jundiaí", "Piracicaba", "Lages", "Patos de Minas", "Parnaíba",
    "Cabo Frio", "Itabuna", "Sete Lagoas", "Dourados",
];

/// A provider and its relative draw weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weighted {
    pub name: &'static str,
    pub weight: f64,
}

pub const PROVIDERS: &[Weighted] = &[
    Weighted { name: "Claro", weight: 5.0 },
    Weighted { name: "Oi", weight: 3.0 },
    Weighted { name: "Tim", weight: 4.0 },
    Weighted { name: "Vivo", weight: 10.0 },
    Weighted { name: NO_INTERNET, weight: 19.0 },
];

pub const FALLBACK_PLANS: &[&str] = &["—"];

/// Plans each provider sells. Unknown providers get [`FALLBACK_PLANS`].
pub fn plans_for(provider: &str) -> &'static [&'static str] {
    match provider {
        "Claro" => &["Fibra 200 Mb", "Fibra 300 Mb", "Fibra 500 Mb", "Fibra 600 Mb", "Fibra 1 Gb"],
        "Oi" => &["Fibra 200 Mb", "Fibra 400 Mb", "Fibra 500 Mb", "Fibra 1 Gb"],
        "Tim" => &["5G Home 400 Mb", "5G Home 500 Mb", "4G Home 200 Mb", "4G Home 100 Mb"],
        "Vivo" => &["Fibra 200 Mb", "Fibra 300 Mb", "Fibra 600 Mb", "Fibra 700 Mb", "Fibra 1 Gb"],
        _ => FALLBACK_PLANS,
    }
}

pub const EMAIL_DOMAINS: &[&str] = &["connect.com.br", "mail.com", "provedor.net", "redeurbana.com"];
