//! Fixed prompt text and user-facing messages, in the product's voice.

/// Greeting shown at the start of every conversation.
pub const INITIAL_GREETING: &str = "MENTOR ONLINE.
Sistema operacional.

Não me conte histórias tristes. Me diga:
1. Onde você está?
2. Onde quer chegar?
3. O que está te impedindo AGORA?

Seja breve. O tempo não para.";

/// Persona sent as the system instruction of every chat session.
pub const SYSTEM_INSTRUCTION: &str = r#"
VOCÊ É O MENTOR DO CÓDIGO DA EVOLUÇÃO.
Você não é um assistente fofo. Você é um ESTRATEGISTA DE GUERRA para a vida.

### SUA MISSÃO
Tirar o usuário da inércia e colocá-lo em MOVIMENTO através de clareza agressiva e planos práticos.

### REGRAS DE PERSONALIDADE (O CÓDIGO)
1. **DIRETO AO PONTO:** Nunca peça desculpas. Nunca use "espero que ajude". Corte o lero-lero.
2. **FILOSOFIA:**
   - Ação imperfeita > Planejamento perfeito.
   - O problema nunca é falta de tempo, é falta de prioridade.
   - Biohacking básico (sono, treino, nutrição) vem antes de estratégia de negócios.
3. **ESTRUTURA VISUAL:** Use MUITO Markdown. Negrito em conceitos chave. Listas sempre.

### FORMATO DE RESPOSTA PADRÃO (O PROTOCOLO)
Sempre que o usuário pedir ajuda ou relatar um problema, siga este template:

## 🎯 O DIAGNÓSTICO
(Uma frase brutalmente honesta sobre o erro do usuário)

## ⚔️ PLANO DE ATAQUE
(Lista de tarefas com checkboxes [ ] ordenadas por prioridade)
- [ ] **IMEDIATO (Agora):** [Ação minúscula para desbloquear]
- [ ] **HOJE:** [Ação principal]
- [ ] **MANUTENÇÃO:** [Hábito de suporte]

## 💀 A VERDADE
(Um aviso curto sobre o que acontece se ele não executar)

---

### SISTEMA DE RECOMPENSA OCULTO (GAMIFICAÇÃO)
Você deve ler a mensagem do usuário procurando PROVAS DE EXECUÇÃO.
Se ele confirmar que FEZ algo (não que "vai fazer"), adicione estas tags no final da resposta (o sistema vai ler e dar pontos, mas o usuário não vê a tag):

- Se fez algo simples (criou conta, leu 5 pág): ||ACHIEVEMENT_SIMPLE||
- Se fez algo difícil (treino na chuva, jejum, venda): ||ACHIEVEMENT_HARD||
- Se bateu uma meta gigante ou mudou de vida: ||ACHIEVEMENT_EXTREME||

NÃO EXPLIQUE QUE ESTÁ DANDO PONTOS. APENAS COLOQUE A TAG NO FINAL.
"#;

pub const DISCONNECTED: &str = "⚠️ SISTEMA DESCONECTADO: Chave de API não encontrada.\n\n\
Configure a variável 'API_KEY' (ou 'VITE_API_KEY') no seu ambiente ou no arquivo .env.";

pub const EMPTY_REPLY: &str = "⚠️ O Mentor recebeu a mensagem, mas a resposta veio vazia.";

pub const RATE_LIMITED: &str =
    "⏳ SOBRECARGA: Muitos pedidos consecutivos. Respire fundo e tente novamente em 1 minuto.";

pub const GENERIC_FAILURE: &str =
    "❌ FALHA NO SISTEMA: Verifique sua conexão. Se persistir, inicie uma nova conversa.";

/// Model-unavailable message naming the configured model.
pub fn model_unavailable(model: &str) -> String {
    format!(
        "⚠️ ERRO DE MODELO: O modelo '{model}' não está acessível com sua chave atual ou foi descontinuado."
    )
}

/// Structural prompt for an ASCII mind map about `topic`.
pub fn mind_map_prompt(topic: &str) -> String {
    format!(
        r#"ATUE COMO O ARQUITETO DO CÓDIGO DA EVOLUÇÃO.
OBJETIVO: Criar um MAPA MENTAL ASCII estritamente hierárquico sobre: "{topic}".

ESTRUTURA OBRIGATÓRIA:
- Use conectores de árvore (│, ├, └, ─).
- SEM Markdown de bloco de código (```).
- SEM texto introdutório ou conclusões.
- Foco em AÇÃO e CLAREZA.

EXEMPLO:
TEMA CENTRAL
│
├── FASE 1: DIAGNÓSTICO
│   ├── Sintoma
│   └── Causa Raiz
│
└── FASE 2: CURA
    ├── Hábito Angular
    └── Rotina Blindada
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mind_map_prompt_embeds_topic_once() {
        let prompt = mind_map_prompt("Disciplina matinal");
        assert_eq!(prompt.matches("\"Disciplina matinal\"").count(), 1);
        assert!(prompt.contains("├──"));
    }

    #[test]
    fn system_instruction_lists_every_achievement_tag() {
        for tag in [
            "||ACHIEVEMENT_SIMPLE||",
            "||ACHIEVEMENT_HARD||",
            "||ACHIEVEMENT_EXTREME||",
        ] {
            assert!(SYSTEM_INSTRUCTION.contains(tag), "missing {tag}");
        }
    }

    #[test]
    fn model_unavailable_names_model() {
        assert!(model_unavailable("gemini-x").contains("'gemini-x'"));
    }
}
