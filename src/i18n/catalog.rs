//! Hand-authored text packs, one per supported language.
//!
//! English is the completeness anchor; every other pack is authored to
//! the same shape. Level-dependent wording lives in three-entry slots
//! (beginner, practical, expert) so the generator, not the data, owns
//! the branching.

use super::store::{
    BreakdownTemplate, CoreIssueTemplate, ExamplesTemplate, LocalePack, SectionTitles,
    SolutionTemplate, SummaryTemplate,
};

pub static EN_US: LocalePack = LocalePack {
    titles: SectionTitles {
        core_issue: "🎯 Core Issue",
        breakdown: "🔍 Breaking It Down",
        solution: "💡 Step-by-Step Solution",
        examples: "📚 Examples",
        summary: "✨ Summary & Next Steps",
    },
    safety_refusal: "I cannot provide assistance with that request as it may involve harmful, illegal, or unsafe activities. Instead, I'd be happy to help you with:\n\n1. Learning about cybersecurity best practices\n2. Understanding legal and ethical technology use\n3. Exploring safe and constructive alternatives\n\nHow can I assist you with a safe and legal topic?",
    clarification_request: "I'd like to help you, but I need a bit more information to provide the best answer. Could you please clarify:\n\n1. What specific aspect are you interested in?\n2. What is your goal or what problem are you trying to solve?\n3. Do you have any constraints or requirements I should know about?\n4. What is your current level of understanding on this topic?\n\nPlease provide more details so I can give you a comprehensive and helpful response.",
    core_issue: CoreIssueTemplate {
        intro: "You're asking about: ",
        bridge: "\n\nThis is a ",
        register: ["fundamental", "practical", "advanced"],
        outro: " topic that involves understanding key concepts and their relationships.",
    },
    breakdown: BreakdownTemplate {
        opening: "Let's break this down into manageable parts:\n\n1. **Foundation**: ",
        foundation: [
            "Starting with the basics",
            "Building on core principles",
            "Examining underlying mechanisms",
        ],
        closing: "\n2. **Key Components**: The main elements involved\n3. **Relationships**: How these parts interact\n4. **Context**: Where this fits in the bigger picture",
    },
    solution: SolutionTemplate {
        opening: "Here's a ",
        approach: ["simple", "structured", "comprehensive"],
        closing: " approach:\n\n**Step 1**: Identify the requirements and constraints\n- Understand what you're trying to achieve\n- Note any limitations or specific conditions\n\n**Step 2**: Plan your approach\n- Choose the right method or strategy\n- Consider alternatives and trade-offs\n\n**Step 3**: Implement systematically\n- Start with the foundation\n- Build incrementally and test as you go\n\n**Step 4**: Verify and refine\n- Check your results\n- Make adjustments as needed",
    },
    examples: ExamplesTemplate {
        heading: ["Simple example", "Practical examples", "Advanced examples"],
        body: ":\n\n**Example 1**: A basic scenario\n- Shows the fundamental concept in action\n- Easy to understand and replicate\n\n**Example 2**: A real-world application\n- Demonstrates practical usage\n- Highlights common patterns and best practices\n\n",
        expert_extra: "**Example 3**: An edge case\n- Explores boundary conditions\n- Shows how to handle complex scenarios",
    },
    summary: SummaryTemplate {
        opening: "**Key Takeaways**:\n- We identified the core issue and broke it down into manageable parts\n- We explored a systematic approach to solving the problem\n- We looked at practical examples to reinforce understanding\n\n**Next Steps**:\n1. ",
        first_step: [
            "Practice with simple examples",
            "Apply this to your specific use case",
            "Explore edge cases and optimizations",
        ],
        bridge: "\n2. ",
        second_step: [
            "Ask questions if anything is unclear",
            "Experiment with variations",
            "Consider performance and scalability",
        ],
        closing: "\n3. Build on this foundation to tackle more complex challenges\n\nFeel free to ask follow-up questions or request clarification on any part!",
    },
};

pub static DE_DE: LocalePack = LocalePack {
    titles: SectionTitles {
        core_issue: "🎯 Kernproblem",
        breakdown: "🔍 Aufschlüsselung",
        solution: "💡 Schritt-für-Schritt-Lösung",
        examples: "📚 Beispiele",
        summary: "✨ Zusammenfassung & Nächste Schritte",
    },
    safety_refusal: "Ich kann bei dieser Anfrage nicht helfen, da sie schädliche, illegale oder unsichere Aktivitäten beinhalten könnte. Stattdessen helfe ich Ihnen gerne bei:\n\n1. Best Practices für Cybersicherheit\n2. Verständnis für legale und ethische Technologienutzung\n3. Erkundung sicherer und konstruktiver Alternativen\n\nWie kann ich Ihnen bei einem sicheren und legalen Thema helfen?",
    clarification_request: "Ich möchte Ihnen helfen, benötige aber etwas mehr Informationen, um die beste Antwort zu geben. Könnten Sie bitte klären:\n\n1. Welcher spezifische Aspekt interessiert Sie?\n2. Was ist Ihr Ziel oder welches Problem versuchen Sie zu lösen?\n3. Gibt es Einschränkungen oder Anforderungen, die ich kennen sollte?\n4. Wie ist Ihr aktuelles Verständnisniveau zu diesem Thema?\n\nBitte geben Sie mehr Details an, damit ich Ihnen eine umfassende und hilfreiche Antwort geben kann.",
    core_issue: CoreIssueTemplate {
        intro: "Sie fragen nach: ",
        bridge: "\n\nDies ist ein ",
        register: ["grundlegendes", "praktisches", "fortgeschrittenes"],
        outro: " Thema, das das Verständnis wichtiger Konzepte und ihrer Beziehungen erfordert.",
    },
    breakdown: BreakdownTemplate {
        opening: "Lassen Sie uns dies in überschaubare Teile aufteilen:\n\n1. **Grundlage**: ",
        foundation: [
            "Beginnen mit den Grundlagen",
            "Aufbau auf Kernprinzipien",
            "Untersuchung zugrunde liegender Mechanismen",
        ],
        closing: "\n2. **Hauptkomponenten**: Die beteiligten Hauptelemente\n3. **Beziehungen**: Wie diese Teile interagieren\n4. **Kontext**: Wo dies ins größere Bild passt",
    },
    solution: SolutionTemplate {
        opening: "Hier ist ein ",
        approach: ["einfacher", "strukturierter", "umfassender"],
        closing: " Ansatz:\n\n**Schritt 1**: Anforderungen und Einschränkungen identifizieren\n- Verstehen Sie, was Sie erreichen möchten\n- Notieren Sie Einschränkungen oder spezifische Bedingungen\n\n**Schritt 2**: Ihren Ansatz planen\n- Wählen Sie die richtige Methode oder Strategie\n- Berücksichtigen Sie Alternativen und Kompromisse\n\n**Schritt 3**: Systematisch umsetzen\n- Beginnen Sie mit der Grundlage\n- Bauen Sie schrittweise auf und testen Sie dabei\n\n**Schritt 4**: Überprüfen und verfeinern\n- Überprüfen Sie Ihre Ergebnisse\n- Nehmen Sie bei Bedarf Anpassungen vor",
    },
    examples: ExamplesTemplate {
        heading: [
            "Einfaches Beispiel",
            "Praktische Beispiele",
            "Fortgeschrittene Beispiele",
        ],
        body: ":\n\n**Beispiel 1**: Ein grundlegendes Szenario\n- Zeigt das grundlegende Konzept in Aktion\n- Leicht zu verstehen und zu replizieren\n\n**Beispiel 2**: Eine reale Anwendung\n- Demonstriert praktische Verwendung\n- Hebt gängige Muster und Best Practices hervor\n\n",
        expert_extra: "**Beispiel 3**: Ein Grenzfall\n- Untersucht Randbedingungen\n- Zeigt den Umgang mit komplexen Szenarien",
    },
    summary: SummaryTemplate {
        opening: "**Wichtige Erkenntnisse**:\n- Wir haben das Kernproblem identifiziert und in überschaubare Teile aufgeteilt\n- Wir haben einen systematischen Ansatz zur Problemlösung untersucht\n- Wir haben praktische Beispiele betrachtet, um das Verständnis zu vertiefen\n\n**Nächste Schritte**:\n1. ",
        first_step: [
            "Mit einfachen Beispielen üben",
            "Auf Ihren spezifischen Anwendungsfall anwenden",
            "Randfälle und Optimierungen erkunden",
        ],
        bridge: "\n2. ",
        second_step: [
            "Fragen stellen, wenn etwas unklar ist",
            "Mit Variationen experimentieren",
            "Leistung und Skalierbarkeit berücksichtigen",
        ],
        closing: "\n3. Auf dieser Grundlage aufbauen, um komplexere Herausforderungen anzugehen",
    },
};

pub static ES_ES: LocalePack = LocalePack {
    titles: SectionTitles {
        core_issue: "🎯 Problema Central",
        breakdown: "🔍 Desglose",
        solution: "💡 Solución Paso a Paso",
        examples: "📚 Ejemplos",
        summary: "✨ Resumen y Próximos Pasos",
    },
    safety_refusal: "No puedo ayudar con esa solicitud ya que puede involucrar actividades dañinas, ilegales o inseguras. En su lugar, estaré encantado de ayudarte con:\n\n1. Mejores prácticas de ciberseguridad\n2. Comprensión del uso legal y ético de la tecnología\n3. Exploración de alternativas seguras y constructivas\n\n¿Cómo puedo ayudarte con un tema seguro y legal?",
    clarification_request: "Me gustaría ayudarte, pero necesito un poco más de información para proporcionar la mejor respuesta. ¿Podrías aclarar:\n\n1. ¿Qué aspecto específico te interesa?\n2. ¿Cuál es tu objetivo o qué problema estás tratando de resolver?\n3. ¿Hay restricciones o requisitos que deba conocer?\n4. ¿Cuál es tu nivel actual de comprensión sobre este tema?\n\nPor favor, proporciona más detalles para que pueda darte una respuesta completa y útil.",
    core_issue: CoreIssueTemplate {
        intro: "Estás preguntando sobre: ",
        bridge: "\n\nEste es un tema ",
        register: ["fundamental", "práctico", "avanzado"],
        outro: " que implica comprender conceptos clave y sus relaciones.",
    },
    breakdown: BreakdownTemplate {
        opening: "Desglosemos esto en partes manejables:\n\n1. **Fundamento**: ",
        foundation: [
            "Comenzando con lo básico",
            "Construyendo sobre principios fundamentales",
            "Examinando mecanismos subyacentes",
        ],
        closing: "\n2. **Componentes Clave**: Los elementos principales involucrados\n3. **Relaciones**: Cómo interactúan estas partes\n4. **Contexto**: Dónde encaja esto en el panorama general",
    },
    solution: SolutionTemplate {
        opening: "Aquí hay un enfoque ",
        approach: ["simple", "estructurado", "integral"],
        closing: ":\n\n**Paso 1**: Identificar requisitos y restricciones\n- Comprende lo que intentas lograr\n- Anota limitaciones o condiciones específicas\n\n**Paso 2**: Planifica tu enfoque\n- Elige el método o estrategia correcta\n- Considera alternativas y compensaciones\n\n**Paso 3**: Implementa sistemáticamente\n- Comienza con la base\n- Construye incrementalmente y prueba sobre la marcha\n\n**Paso 4**: Verifica y refina\n- Verifica tus resultados\n- Haz ajustes según sea necesario",
    },
    examples: ExamplesTemplate {
        heading: ["Ejemplo simple", "Ejemplos prácticos", "Ejemplos avanzados"],
        body: ":\n\n**Ejemplo 1**: Un escenario básico\n- Muestra el concepto fundamental en acción\n- Fácil de entender y replicar\n\n**Ejemplo 2**: Una aplicación del mundo real\n- Demuestra el uso práctico\n- Destaca patrones comunes y mejores prácticas\n\n",
        expert_extra: "**Ejemplo 3**: Un caso límite\n- Explora condiciones de frontera\n- Muestra cómo manejar escenarios complejos",
    },
    summary: SummaryTemplate {
        opening: "**Conclusiones clave**:\n- Identificamos el problema central y lo dividimos en partes manejables\n- Exploramos un enfoque sistemático para resolver el problema\n- Examinamos ejemplos prácticos para reforzar la comprensión\n\n**Próximos pasos**:\n1. ",
        first_step: [
            "Practicar con ejemplos simples",
            "Aplicar esto a tu caso de uso específico",
            "Explorar casos extremos y optimizaciones",
        ],
        bridge: "\n2. ",
        second_step: [
            "Hacer preguntas si algo no está claro",
            "Experimentar con variaciones",
            "Considerar rendimiento y escalabilidad",
        ],
        closing: "\n3. Construir sobre esta base para abordar desafíos más complejos",
    },
};

pub static FR_FR: LocalePack = LocalePack {
    titles: SectionTitles {
        core_issue: "🎯 Problème Principal",
        breakdown: "🔍 Décomposition",
        solution: "💡 Solution Étape par Étape",
        examples: "📚 Exemples",
        summary: "✨ Résumé et Prochaines Étapes",
    },
    safety_refusal: "Je ne peux pas vous aider avec cette demande car elle peut impliquer des activités nuisibles, illégales ou dangereuses. À la place, je serais heureux de vous aider avec:\n\n1. Les meilleures pratiques en cybersécurité\n2. La compréhension de l'utilisation légale et éthique de la technologie\n3. L'exploration d'alternatives sûres et constructives\n\nComment puis-je vous aider avec un sujet sûr et légal?",
    clarification_request: "J'aimerais vous aider, mais j'ai besoin d'un peu plus d'informations pour fournir la meilleure réponse. Pourriez-vous clarifier:\n\n1. Quel aspect spécifique vous intéresse?\n2. Quel est votre objectif ou quel problème essayez-vous de résoudre?\n3. Y a-t-il des contraintes ou des exigences que je devrais connaître?\n4. Quel est votre niveau de compréhension actuel sur ce sujet?\n\nVeuillez fournir plus de détails afin que je puisse vous donner une réponse complète et utile.",
    core_issue: CoreIssueTemplate {
        intro: "Vous demandez à propos de: ",
        bridge: "\n\nC'est un sujet ",
        register: ["fondamental", "pratique", "avancé"],
        outro: " qui implique la compréhension de concepts clés et de leurs relations.",
    },
    breakdown: BreakdownTemplate {
        opening: "Décomposons cela en parties gérables:\n\n1. **Fondation**: ",
        foundation: [
            "Commencer par les bases",
            "S'appuyer sur les principes fondamentaux",
            "Examiner les mécanismes sous-jacents",
        ],
        closing: "\n2. **Composants Clés**: Les principaux éléments impliqués\n3. **Relations**: Comment ces parties interagissent\n4. **Contexte**: Où cela s'inscrit dans le tableau d'ensemble",
    },
    solution: SolutionTemplate {
        opening: "Voici une approche ",
        approach: ["simple", "structurée", "complète"],
        closing: ":\n\n**Étape 1**: Identifier les exigences et les contraintes\n- Comprendre ce que vous essayez d'accomplir\n- Noter les limitations ou conditions spécifiques\n\n**Étape 2**: Planifier votre approche\n- Choisir la bonne méthode ou stratégie\n- Considérer les alternatives et les compromis\n\n**Étape 3**: Mettre en œuvre systématiquement\n- Commencer par la fondation\n- Construire progressivement et tester au fur et à mesure\n\n**Étape 4**: Vérifier et affiner\n- Vérifier vos résultats\n- Faire des ajustements si nécessaire",
    },
    examples: ExamplesTemplate {
        heading: ["Exemple simple", "Exemples pratiques", "Exemples avancés"],
        body: ":\n\n**Exemple 1**: Un scénario de base\n- Montre le concept fondamental en action\n- Facile à comprendre et à reproduire\n\n**Exemple 2**: Une application du monde réel\n- Démontre l'utilisation pratique\n- Met en évidence les modèles courants et les meilleures pratiques\n\n",
        expert_extra: "**Exemple 3**: Un cas limite\n- Explore les conditions aux limites\n- Montre comment gérer des scénarios complexes",
    },
    summary: SummaryTemplate {
        opening: "**Points clés à retenir**:\n- Nous avons identifié le problème principal et l'avons décomposé en parties gérables\n- Nous avons exploré une approche systématique pour résoudre le problème\n- Nous avons examiné des exemples pratiques pour renforcer la compréhension\n\n**Prochaines étapes**:\n1. ",
        first_step: [
            "Pratiquer avec des exemples simples",
            "Appliquer cela à votre cas d'utilisation spécifique",
            "Explorer les cas limites et les optimisations",
        ],
        bridge: "\n2. ",
        second_step: [
            "Poser des questions si quelque chose n'est pas clair",
            "Expérimenter avec des variations",
            "Considérer les performances et l'évolutivité",
        ],
        closing: "\n3. S'appuyer sur cette base pour relever des défis plus complexes",
    },
};

pub static PT_PT: LocalePack = LocalePack {
    titles: SectionTitles {
        core_issue: "🎯 Problema Central",
        breakdown: "🔍 Detalhamento",
        solution: "💡 Solução Passo a Passo",
        examples: "📚 Exemplos",
        summary: "✨ Resumo e Próximos Passos",
    },
    safety_refusal: "Não posso ajudar com essa solicitação, pois pode envolver atividades prejudiciais, ilegais ou inseguras. Em vez disso, ficarei feliz em ajudá-lo com:\n\n1. Melhores práticas de segurança cibernética\n2. Compreensão do uso legal e ético da tecnologia\n3. Exploração de alternativas seguras e construtivas\n\nComo posso ajudá-lo com um tópico seguro e legal?",
    clarification_request: "Gostaria de ajudá-lo, mas preciso de um pouco mais de informações para fornecer a melhor resposta. Você poderia esclarecer:\n\n1. Qual aspecto específico lhe interessa?\n2. Qual é o seu objetivo ou que problema está tentando resolver?\n3. Há restrições ou requisitos que eu deva saber?\n4. Qual é o seu nível atual de compreensão sobre este tópico?\n\nPor favor, forneça mais detalhes para que eu possa dar uma resposta abrangente e útil.",
    core_issue: CoreIssueTemplate {
        intro: "Você está perguntando sobre: ",
        bridge: "\n\nEste é um tópico ",
        register: ["fundamental", "prático", "avançado"],
        outro: " que envolve a compreensão de conceitos-chave e suas relações.",
    },
    breakdown: BreakdownTemplate {
        opening: "Vamos dividir isso em partes gerenciáveis:\n\n1. **Fundação**: ",
        foundation: [
            "Começando com o básico",
            "Construindo sobre princípios fundamentais",
            "Examinando mecanismos subjacentes",
        ],
        closing: "\n2. **Componentes Principais**: Os principais elementos envolvidos\n3. **Relações**: Como essas partes interagem\n4. **Contexto**: Onde isso se encaixa no quadro geral",
    },
    solution: SolutionTemplate {
        opening: "Aqui está uma abordagem ",
        approach: ["simples", "estruturada", "abrangente"],
        closing: ":\n\n**Passo 1**: Identificar requisitos e restrições\n- Entenda o que você está tentando alcançar\n- Anote limitações ou condições específicas\n\n**Passo 2**: Planeje sua abordagem\n- Escolha o método ou estratégia certa\n- Considere alternativas e compensações\n\n**Passo 3**: Implemente sistematicamente\n- Comece com a base\n- Construa incrementalmente e teste conforme avança\n\n**Passo 4**: Verifique e refine\n- Verifique seus resultados\n- Faça ajustes conforme necessário",
    },
    examples: ExamplesTemplate {
        heading: ["Exemplo simples", "Exemplos práticos", "Exemplos avançados"],
        body: ":\n\n**Exemplo 1**: Um cenário básico\n- Mostra o conceito fundamental em ação\n- Fácil de entender e replicar\n\n**Exemplo 2**: Uma aplicação do mundo real\n- Demonstra uso prático\n- Destaca padrões comuns e melhores práticas\n\n",
        expert_extra: "**Exemplo 3**: Um caso extremo\n- Explora condições de limite\n- Mostra como lidar com cenários complexos",
    },
    summary: SummaryTemplate {
        opening: "**Principais conclusões**:\n- Identificamos o problema central e o dividimos em partes gerenciáveis\n- Exploramos uma abordagem sistemática para resolver o problema\n- Examinamos exemplos práticos para reforçar a compreensão\n\n**Próximos passos**:\n1. ",
        first_step: [
            "Praticar com exemplos simples",
            "Aplicar isso ao seu caso de uso específico",
            "Explorar casos extremos e otimizações",
        ],
        bridge: "\n2. ",
        second_step: [
            "Fazer perguntas se algo não estiver claro",
            "Experimentar com variações",
            "Considerar desempenho e escalabilidade",
        ],
        closing: "\n3. Construir sobre esta base para enfrentar desafios mais complexos",
    },
};

pub static IT_IT: LocalePack = LocalePack {
    titles: SectionTitles {
        core_issue: "🎯 Problema Centrale",
        breakdown: "🔍 Scomposizione",
        solution: "💡 Soluzione Passo dopo Passo",
        examples: "📚 Esempi",
        summary: "✨ Riepilogo e Prossimi Passi",
    },
    safety_refusal: "Non posso fornire assistenza per quella richiesta in quanto potrebbe coinvolgere attività dannose, illegali o non sicure. Invece, sarò felice di aiutarti con:\n\n1. Migliori pratiche di sicurezza informatica\n2. Comprensione dell'uso legale ed etico della tecnologia\n3. Esplorazione di alternative sicure e costruttive\n\nCome posso aiutarti con un argomento sicuro e legale?",
    clarification_request: "Vorrei aiutarti, ma ho bisogno di qualche informazione in più per fornire la migliore risposta. Potresti chiarire:\n\n1. Quale aspetto specifico ti interessa?\n2. Qual è il tuo obiettivo o quale problema stai cercando di risolvere?\n3. Ci sono vincoli o requisiti che dovrei conoscere?\n4. Qual è il tuo livello attuale di comprensione su questo argomento?\n\nFornisci più dettagli in modo che possa darti una risposta completa e utile.",
    core_issue: CoreIssueTemplate {
        intro: "Stai chiedendo di: ",
        bridge: "\n\nQuesto è un argomento ",
        register: ["fondamentale", "pratico", "avanzato"],
        outro: " che implica la comprensione di concetti chiave e delle loro relazioni.",
    },
    breakdown: BreakdownTemplate {
        opening: "Scomponiamo questo in parti gestibili:\n\n1. **Fondazione**: ",
        foundation: [
            "Iniziando con le basi",
            "Costruendo sui principi fondamentali",
            "Esaminando i meccanismi sottostanti",
        ],
        closing: "\n2. **Componenti Chiave**: Gli elementi principali coinvolti\n3. **Relazioni**: Come queste parti interagiscono\n4. **Contesto**: Dove questo si inserisce nel quadro generale",
    },
    solution: SolutionTemplate {
        opening: "Ecco un approccio ",
        approach: ["semplice", "strutturato", "completo"],
        closing: ":\n\n**Passo 1**: Identificare requisiti e vincoli\n- Capire cosa stai cercando di ottenere\n- Annotare limitazioni o condizioni specifiche\n\n**Passo 2**: Pianificare il tuo approccio\n- Scegliere il metodo o la strategia giusta\n- Considerare alternative e compromessi\n\n**Passo 3**: Implementare sistematicamente\n- Iniziare con la base\n- Costruire incrementalmente e testare man mano\n\n**Passo 4**: Verificare e perfezionare\n- Controllare i risultati\n- Apportare modifiche se necessario",
    },
    examples: ExamplesTemplate {
        heading: ["Esempio semplice", "Esempi pratici", "Esempi avanzati"],
        body: ":\n\n**Esempio 1**: Uno scenario di base\n- Mostra il concetto fondamentale in azione\n- Facile da capire e replicare\n\n**Esempio 2**: Un'applicazione del mondo reale\n- Dimostra l'uso pratico\n- Evidenzia modelli comuni e best practice\n\n",
        expert_extra: "**Esempio 3**: Un caso limite\n- Esplora le condizioni al contorno\n- Mostra come gestire scenari complessi",
    },
    summary: SummaryTemplate {
        opening: "**Punti chiave**:\n- Abbiamo identificato il problema centrale e lo abbiamo scomposto in parti gestibili\n- Abbiamo esplorato un approccio sistematico per risolvere il problema\n- Abbiamo esaminato esempi pratici per rafforzare la comprensione\n\n**Prossimi passi**:\n1. ",
        first_step: [
            "Praticare con esempi semplici",
            "Applicare questo al tuo caso d'uso specifico",
            "Esplorare casi limite e ottimizzazioni",
        ],
        bridge: "\n2. ",
        second_step: [
            "Fare domande se qualcosa non è chiaro",
            "Sperimentare con variazioni",
            "Considerare prestazioni e scalabilità",
        ],
        closing: "\n3. Costruire su questa base per affrontare sfide più complesse",
    },
};

pub static RU_RU: LocalePack = LocalePack {
    titles: SectionTitles {
        core_issue: "🎯 Основная Проблема",
        breakdown: "🔍 Разбивка",
        solution: "💡 Пошаговое Решение",
        examples: "📚 Примеры",
        summary: "✨ Резюме и Следующие Шаги",
    },
    safety_refusal: "Я не могу помочь с этим запросом, так как он может включать вредные, незаконные или небезопасные действия. Вместо этого я буду рад помочь вам с:\n\n1. Лучшими практиками кибербезопасности\n2. Пониманием законного и этичного использования технологий\n3. Изучением безопасных и конструктивных альтернатив\n\nКак я могу помочь вам с безопасной и законной темой?",
    clarification_request: "Я хотел бы помочь вам, но мне нужно немного больше информации, чтобы дать лучший ответ. Не могли бы вы уточнить:\n\n1. Какой конкретный аспект вас интересует?\n2. Какова ваша цель или какую проблему вы пытаетесь решить?\n3. Есть ли ограничения или требования, о которых мне следует знать?\n4. Каков ваш текущий уровень понимания этой темы?\n\nПожалуйста, предоставьте больше деталей, чтобы я мог дать вам исчерпывающий и полезный ответ.",
    core_issue: CoreIssueTemplate {
        intro: "Вы спрашиваете о: ",
        bridge: "\n\nЭто ",
        register: ["фундаментальная", "практическая", "продвинутая"],
        outro: " тема, которая включает понимание ключевых концепций и их взаимосвязей.",
    },
    breakdown: BreakdownTemplate {
        opening: "Давайте разобьем это на управляемые части:\n\n1. **Основа**: ",
        foundation: [
            "Начиная с основ",
            "Опираясь на основные принципы",
            "Изучение базовых механизмов",
        ],
        closing: "\n2. **Ключевые Компоненты**: Основные задействованные элементы\n3. **Взаимосвязи**: Как эти части взаимодействуют\n4. **Контекст**: Где это вписывается в общую картину",
    },
    solution: SolutionTemplate {
        opening: "Вот ",
        approach: ["простой", "структурированный", "всесторонний"],
        closing: " подход:\n\n**Шаг 1**: Определите требования и ограничения\n- Поймите, чего вы пытаетесь достичь\n- Отметьте ограничения или конкретные условия\n\n**Шаг 2**: Спланируйте свой подход\n- Выберите правильный метод или стратегию\n- Рассмотрите альтернативы и компромиссы\n\n**Шаг 3**: Реализуйте систематически\n- Начните с основы\n- Стройте постепенно и тестируйте по ходу\n\n**Шаг 4**: Проверьте и усовершенствуйте\n- Проверьте свои результаты\n- Внесите корректировки по мере необходимости",
    },
    examples: ExamplesTemplate {
        heading: [
            "Простой пример",
            "Практические примеры",
            "Продвинутые примеры",
        ],
        body: ":\n\n**Пример 1**: Базовый сценарий\n- Показывает фундаментальную концепцию в действии\n- Легко понять и воспроизвести\n\n**Пример 2**: Реальное приложение\n- Демонстрирует практическое использование\n- Подчеркивает общие шаблоны и лучшие практики\n\n",
        expert_extra: "**Пример 3**: Граничный случай\n- Исследует граничные условия\n- Показывает, как обрабатывать сложные сценарии",
    },
    summary: SummaryTemplate {
        opening: "**Ключевые выводы**:\n- Мы определили основную проблему и разбили ее на управляемые части\n- Мы изучили систематический подход к решению проблемы\n- Мы рассмотрели практические примеры для закрепления понимания\n\n**Следующие шаги**:\n1. ",
        first_step: [
            "Практиковаться с простыми примерами",
            "Применить это к вашему конкретному случаю использования",
            "Изучить граничные случаи и оптимизации",
        ],
        bridge: "\n2. ",
        second_step: [
            "Задавать вопросы, если что-то неясно",
            "Экспериментировать с вариациями",
            "Рассмотреть производительность и масштабируемость",
        ],
        closing: "\n3. Опираться на эту основу для решения более сложных задач",
    },
};

pub static JA_JP: LocalePack = LocalePack {
    titles: SectionTitles {
        core_issue: "🎯 核心的な問題",
        breakdown: "🔍 分解",
        solution: "💡 ステップバイステップの解決策",
        examples: "📚 例",
        summary: "✨ まとめと次のステップ",
    },
    safety_refusal: "その要求は有害、違法、または安全でない活動を含む可能性があるため、支援できません。代わりに、以下のことでお手伝いできます：\n\n1. サイバーセキュリティのベストプラクティスについて学ぶ\n2. 合法的で倫理的な技術の使用を理解する\n3. 安全で建設的な代替案を探る\n\n安全で合法的なトピックでどのようにお手伝いできますか？",
    clarification_request: "お手伝いしたいのですが、最良の回答を提供するためにもう少し情報が必要です。以下を明確にしていただけますか：\n\n1. どの具体的な側面に興味がありますか？\n2. あなたの目標は何ですか、またはどのような問題を解決しようとしていますか？\n3. 知っておくべき制約や要件はありますか？\n4. このトピックに関する現在の理解レベルはどのくらいですか？\n\n包括的で役立つ回答を提供できるよう、詳細を教えてください。",
    core_issue: CoreIssueTemplate {
        intro: "あなたは次のことについて尋ねています：",
        bridge: "\n\nこれは",
        register: ["基本的な", "実践的な", "高度な"],
        outro: "トピックで、重要な概念とその関係を理解することが含まれます。",
    },
    breakdown: BreakdownTemplate {
        opening: "これを管理可能な部分に分解しましょう：\n\n1. **基礎**: ",
        foundation: ["基本から始める", "核心原則に基づく", "基礎メカニズムの検討"],
        closing: "\n2. **主要コンポーネント**: 関与する主要要素\n3. **関係**: これらの部分がどのように相互作用するか\n4. **コンテキスト**: これが全体像のどこに当てはまるか",
    },
    solution: SolutionTemplate {
        opening: "これは",
        approach: ["シンプルな", "構造化された", "包括的な"],
        closing: "アプローチです：\n\n**ステップ1**: 要件と制約を特定する\n- 達成しようとしていることを理解する\n- 制限や特定の条件を記録する\n\n**ステップ2**: アプローチを計画する\n- 適切な方法または戦略を選択する\n- 代替案とトレードオフを検討する\n\n**ステップ3**: 体系的に実装する\n- 基礎から始める\n- 段階的に構築し、進めながらテストする\n\n**ステップ4**: 検証して改善する\n- 結果を確認する\n- 必要に応じて調整する",
    },
    examples: ExamplesTemplate {
        heading: ["シンプルな例", "実用的な例", "高度な例"],
        body: ":\n\n**例1**: 基本的なシナリオ\n- 基本概念の実践を示す\n- 理解しやすく再現可能\n\n**例2**: 実世界のアプリケーション\n- 実用的な使用法を示す\n- 一般的なパターンとベストプラクティスを強調\n\n",
        expert_extra: "**例3**: エッジケース\n- 境界条件を探る\n- 複雑なシナリオの扱い方を示す",
    },
    summary: SummaryTemplate {
        opening: "**重要なポイント**:\n- 核心的な問題を特定し、管理可能な部分に分解しました\n- 問題を解決するための体系的なアプローチを探りました\n- 理解を深めるために実用的な例を見ました\n\n**次のステップ**:\n1. ",
        first_step: [
            "シンプルな例で練習する",
            "特定のユースケースに適用する",
            "エッジケースと最適化を探る",
        ],
        bridge: "\n2. ",
        second_step: [
            "不明な点があれば質問する",
            "バリエーションを試す",
            "パフォーマンスとスケーラビリティを考慮する",
        ],
        closing: "\n3. この基礎の上に構築して、より複雑な課題に取り組む",
    },
};

pub static ZH_CN: LocalePack = LocalePack {
    titles: SectionTitles {
        core_issue: "🎯 核心问题",
        breakdown: "🔍 分解",
        solution: "💡 逐步解决方案",
        examples: "📚 示例",
        summary: "✨ 总结与下一步",
    },
    safety_refusal: "我无法协助该请求，因为它可能涉及有害、非法或不安全的活动。相反，我很乐意帮助您：\n\n1. 学习网络安全最佳实践\n2. 了解合法和道德的技术使用\n3. 探索安全和建设性的替代方案\n\n我如何帮助您处理安全合法的话题？",
    clarification_request: "我想帮助您，但需要更多信息才能提供最佳答案。您能否澄清：\n\n1. 您对哪个具体方面感兴趣？\n2. 您的目标是什么，或者您试图解决什么问题？\n3. 我应该知道的任何限制或要求吗？\n4. 您对这个主题的当前理解水平如何？\n\n请提供更多详细信息，以便我能给您一个全面且有用的回答。",
    core_issue: CoreIssueTemplate {
        intro: "您询问的是：",
        bridge: "\n\n这是一个",
        register: ["基础", "实用", "高级"],
        outro: "主题，涉及理解关键概念及其关系。",
    },
    breakdown: BreakdownTemplate {
        opening: "让我们将其分解为可管理的部分：\n\n1. **基础**: ",
        foundation: ["从基础开始", "建立在核心原则上", "检查底层机制"],
        closing: "\n2. **关键组件**: 涉及的主要元素\n3. **关系**: 这些部分如何相互作用\n4. **背景**: 这在更大的图景中的位置",
    },
    solution: SolutionTemplate {
        opening: "这是一个",
        approach: ["简单的", "结构化的", "全面的"],
        closing: "方法：\n\n**步骤1**: 确定需求和约束\n- 了解您要实现的目标\n- 记录限制或特定条件\n\n**步骤2**: 规划您的方法\n- 选择正确的方法或策略\n- 考虑替代方案和权衡\n\n**步骤3**: 系统地实施\n- 从基础开始\n- 逐步构建并在进行中测试\n\n**步骤4**: 验证和完善\n- 检查您的结果\n- 根据需要进行调整",
    },
    examples: ExamplesTemplate {
        heading: ["简单示例", "实用示例", "高级示例"],
        body: ":\n\n**示例1**: 基本场景\n- 展示基本概念的实际应用\n- 易于理解和复制\n\n**示例2**: 现实世界应用\n- 演示实际用法\n- 突出常见模式和最佳实践\n\n",
        expert_extra: "**示例3**: 边缘情况\n- 探索边界条件\n- 展示如何处理复杂场景",
    },
    summary: SummaryTemplate {
        opening: "**关键要点**:\n- 我们确定了核心问题并将其分解为可管理的部分\n- 我们探索了解决问题的系统方法\n- 我们查看了实用示例以加强理解\n\n**下一步**:\n1. ",
        first_step: ["用简单的例子练习", "将其应用于您的特定用例", "探索边缘情况和优化"],
        bridge: "\n2. ",
        second_step: ["如果有任何不清楚的地方请提问", "尝试变化", "考虑性能和可扩展性"],
        closing: "\n3. 在此基础上构建以应对更复杂的挑战",
    },
};

pub static KO_KR: LocalePack = LocalePack {
    titles: SectionTitles {
        core_issue: "🎯 핵심 문제",
        breakdown: "🔍 세부 분석",
        solution: "💡 단계별 솔루션",
        examples: "📚 예제",
        summary: "✨ 요약 및 다음 단계",
    },
    safety_refusal: "해당 요청은 유해하거나 불법적이거나 안전하지 않은 활동을 포함할 수 있으므로 도움을 드릴 수 없습니다. 대신 다음과 같은 도움을 드릴 수 있습니다:\n\n1. 사이버 보안 모범 사례 학습\n2. 합법적이고 윤리적인 기술 사용 이해\n3. 안전하고 건설적인 대안 탐색\n\n안전하고 합법적인 주제로 어떻게 도와드릴까요?",
    clarification_request: "도와드리고 싶지만 최상의 답변을 제공하기 위해 조금 더 많은 정보가 필요합니다. 다음을 명확히 해주시겠습니까:\n\n1. 어떤 구체적인 측면에 관심이 있으신가요?\n2. 목표가 무엇이거나 어떤 문제를 해결하려고 하시나요?\n3. 제가 알아야 할 제약이나 요구 사항이 있나요?\n4. 이 주제에 대한 현재 이해 수준은 어떻습니까?\n\n포괄적이고 유용한 답변을 드릴 수 있도록 자세한 내용을 제공해 주세요.",
    core_issue: CoreIssueTemplate {
        intro: "다음에 대해 질문하고 계십니다: ",
        bridge: "\n\n이것은 ",
        register: ["기본적인", "실용적인", "고급"],
        outro: " 주제로 핵심 개념과 그 관계를 이해하는 것을 포함합니다.",
    },
    breakdown: BreakdownTemplate {
        opening: "이것을 관리 가능한 부분으로 나누어 봅시다:\n\n1. **기초**: ",
        foundation: ["기본부터 시작", "핵심 원칙 기반 구축", "기본 메커니즘 검토"],
        closing: "\n2. **주요 구성 요소**: 관련된 주요 요소\n3. **관계**: 이러한 부분이 어떻게 상호 작용하는지\n4. **맥락**: 이것이 더 큰 그림에서 어디에 맞는지",
    },
    solution: SolutionTemplate {
        opening: "다음은 ",
        approach: ["간단한", "구조화된", "포괄적인"],
        closing: " 접근 방식입니다:\n\n**1단계**: 요구 사항 및 제약 조건 식별\n- 달성하려는 것을 이해하십시오\n- 제한 사항이나 특정 조건을 기록하십시오\n\n**2단계**: 접근 방식 계획\n- 올바른 방법이나 전략을 선택하십시오\n- 대안과 절충안을 고려하십시오\n\n**3단계**: 체계적으로 구현\n- 기초부터 시작하십시오\n- 점진적으로 구축하고 진행하면서 테스트하십시오\n\n**4단계**: 검증 및 개선\n- 결과를 확인하십시오\n- 필요에 따라 조정하십시오",
    },
    examples: ExamplesTemplate {
        heading: ["간단한 예", "실용적인 예", "고급 예"],
        body: ":\n\n**예 1**: 기본 시나리오\n- 기본 개념의 실제 적용을 보여줍니다\n- 이해하고 복제하기 쉽습니다\n\n**예 2**: 실제 응용 프로그램\n- 실용적인 사용법을 보여줍니다\n- 일반적인 패턴과 모범 사례를 강조합니다\n\n",
        expert_extra: "**예 3**: 엣지 케이스\n- 경계 조건을 탐색합니다\n- 복잡한 시나리오를 처리하는 방법을 보여줍니다",
    },
    summary: SummaryTemplate {
        opening: "**주요 요점**:\n- 핵심 문제를 식별하고 관리 가능한 부분으로 나누었습니다\n- 문제를 해결하기 위한 체계적인 접근 방식을 탐색했습니다\n- 이해를 강화하기 위해 실용적인 예를 살펴보았습니다\n\n**다음 단계**:\n1. ",
        first_step: [
            "간단한 예로 연습하기",
            "특정 사용 사례에 적용하기",
            "엣지 케이스 및 최적화 탐색",
        ],
        bridge: "\n2. ",
        second_step: [
            "불분명한 것이 있으면 질문하기",
            "변형 실험하기",
            "성능 및 확장성 고려",
        ],
        closing: "\n3. 이 기초 위에 구축하여 더 복잡한 과제를 해결하기",
    },
};

pub static TR_TR: LocalePack = LocalePack {
    titles: SectionTitles {
        core_issue: "🎯 Ana Sorun",
        breakdown: "🔍 Ayrıntılı İnceleme",
        solution: "💡 Adım Adım Çözüm",
        examples: "📚 Örnekler",
        summary: "✨ Özet ve Sonraki Adımlar",
    },
    safety_refusal: "Bu istek zararlı, yasadışı veya güvenli olmayan faaliyetler içerebileceğinden yardımcı olamam. Bunun yerine size şunlarda yardımcı olmaktan mutluluk duyarım:\n\n1. Siber güvenlik en iyi uygulamalarını öğrenmek\n2. Yasal ve etik teknoloji kullanımını anlamak\n3. Güvenli ve yapıcı alternatifleri keşfetmek\n\nGüvenli ve yasal bir konuda size nasıl yardımcı olabilirim?",
    clarification_request: "Size yardımcı olmak istiyorum, ancak en iyi cevabı vermek için biraz daha bilgiye ihtiyacım var. Lütfen şunları açıklayabilir misiniz:\n\n1. Hangi belirli yönle ilgileniyorsunuz?\n2. Hedefiniz nedir veya hangi sorunu çözmeye çalışıyorsunuz?\n3. Bilmem gereken herhangi bir kısıtlama veya gereksinim var mı?\n4. Bu konudaki mevcut anlayış seviyeniz nedir?\n\nSize kapsamlı ve yararlı bir yanıt verebilmem için lütfen daha fazla ayrıntı sağlayın.",
    core_issue: CoreIssueTemplate {
        intro: "Şunu soruyorsunuz: ",
        bridge: "\n\nBu, ",
        register: ["temel", "pratik", "ileri düzey"],
        outro: " bir konudur ve temel kavramları ve ilişkilerini anlamayı içerir.",
    },
    breakdown: BreakdownTemplate {
        opening: "Bunu yönetilebilir parçalara ayıralım:\n\n1. **Temel**: ",
        foundation: [
            "Temellerle başlama",
            "Temel ilkeler üzerine inşa etme",
            "Altta yatan mekanizmaları inceleme",
        ],
        closing: "\n2. **Ana Bileşenler**: İlgili ana öğeler\n3. **İlişkiler**: Bu parçalar nasıl etkileşime giriyor\n4. **Bağlam**: Bunun büyük resimde nereye uyduğu",
    },
    solution: SolutionTemplate {
        opening: "İşte ",
        approach: ["basit", "yapılandırılmış", "kapsamlı"],
        closing: " bir yaklaşım:\n\n**Adım 1**: Gereksinimleri ve kısıtlamaları belirleyin\n- Neyi başarmaya çalıştığınızı anlayın\n- Sınırlamaları veya belirli koşulları not edin\n\n**Adım 2**: Yaklaşımınızı planlayın\n- Doğru yöntemi veya stratejiyi seçin\n- Alternatifleri ve ödünleri göz önünde bulundurun\n\n**Adım 3**: Sistematik olarak uygulayın\n- Temelle başlayın\n- Aşamalı olarak oluşturun ve ilerlerken test edin\n\n**Adım 4**: Doğrulayın ve iyileştirin\n- Sonuçlarınızı kontrol edin\n- Gerektiğinde ayarlamalar yapın",
    },
    examples: ExamplesTemplate {
        heading: ["Basit örnek", "Pratik örnekler", "Gelişmiş örnekler"],
        body: ":\n\n**Örnek 1**: Temel bir senaryo\n- Temel kavramı uygulamada gösterir\n- Anlaşılması ve çoğaltılması kolay\n\n**Örnek 2**: Gerçek dünya uygulaması\n- Pratik kullanımı gösterir\n- Yaygın kalıpları ve en iyi uygulamaları vurgular\n\n",
        expert_extra: "**Örnek 3**: Bir uç durum\n- Sınır koşullarını araştırır\n- Karmaşık senaryoların nasıl ele alınacağını gösterir",
    },
    summary: SummaryTemplate {
        opening: "**Önemli Çıkarımlar**:\n- Ana sorunu belirledik ve yönetilebilir parçalara ayırdık\n- Sorunu çözmek için sistematik bir yaklaşım keşfettik\n- Anlayışı pekiştirmek için pratik örneklere baktık\n\n**Sonraki Adımlar**:\n1. ",
        first_step: [
            "Basit örneklerle pratik yapın",
            "Bunu özel kullanım durumunuza uygulayın",
            "Uç durumları ve optimizasyonları keşfedin",
        ],
        bridge: "\n2. ",
        second_step: [
            "Bir şey belirsizse sorular sorun",
            "Varyasyonlarla deney yapın",
            "Performans ve ölçeklenebilirliği göz önünde bulundurun",
        ],
        closing: "\n3. Daha karmaşık zorlukları ele almak için bu temel üzerine inşa edin",
    },
};

pub static AR_SA: LocalePack = LocalePack {
    titles: SectionTitles {
        core_issue: "🎯 المشكلة الأساسية",
        breakdown: "🔍 التفصيل",
        solution: "💡 الحل خطوة بخطوة",
        examples: "📚 أمثلة",
        summary: "✨ الملخص والخطوات التالية",
    },
    safety_refusal: "لا يمكنني تقديم المساعدة في هذا الطلب لأنه قد يتضمن أنشطة ضارة أو غير قانونية أو غير آمنة. بدلاً من ذلك، سأكون سعيدًا بمساعدتك في:\n\n1. التعرف على أفضل ممارسات الأمن السيبراني\n2. فهم الاستخدام القانوني والأخلاقي للتكنولوجيا\n3. استكشاف البدائل الآمنة والبناءة\n\nكيف يمكنني مساعدتك في موضوع آمن وقانوني؟",
    clarification_request: "أود مساعدتك، لكنني بحاجة إلى مزيد من المعلومات لتقديم أفضل إجابة. هل يمكنك توضيح:\n\n1. ما هو الجانب المحدد الذي تهتم به؟\n2. ما هو هدفك أو ما المشكلة التي تحاول حلها؟\n3. هل هناك أي قيود أو متطلبات يجب أن أعرفها؟\n4. ما هو مستوى فهمك الحالي لهذا الموضوع؟\n\nيرجى تقديم المزيد من التفاصيل حتى أتمكن من إعطائك إجابة شاملة ومفيدة.",
    core_issue: CoreIssueTemplate {
        intro: "أنت تسأل عن: ",
        bridge: "\n\nهذا موضوع ",
        register: ["أساسي", "عملي", "متقدم"],
        outro: " يتضمن فهم المفاهيم الأساسية وعلاقاتها.",
    },
    breakdown: BreakdownTemplate {
        opening: "دعنا نقسم هذا إلى أجزاء يمكن إدارتها:\n\n1. **الأساس**: ",
        foundation: [
            "البدء بالأساسيات",
            "البناء على المبادئ الأساسية",
            "فحص الآليات الأساسية",
        ],
        closing: "\n2. **المكونات الرئيسية**: العناصر الرئيسية المعنية\n3. **العلاقات**: كيف تتفاعل هذه الأجزاء\n4. **السياق**: أين يتناسب هذا في الصورة الأكبر",
    },
    solution: SolutionTemplate {
        opening: "إليك نهج ",
        approach: ["بسيط", "منظم", "شامل"],
        closing: ":\n\n**الخطوة 1**: تحديد المتطلبات والقيود\n- فهم ما تحاول تحقيقه\n- لاحظ أي قيود أو شروط محددة\n\n**الخطوة 2**: خطط لنهجك\n- اختر الطريقة أو الاستراتيجية الصحيحة\n- ضع في اعتبارك البدائل والمقايضات\n\n**الخطوة 3**: نفذ بشكل منهجي\n- ابدأ بالأساس\n- ابنِ تدريجيًا واختبر أثناء التقدم\n\n**الخطوة 4**: تحقق وحسّن\n- تحقق من نتائجك\n- قم بإجراء التعديلات حسب الحاجة",
    },
    examples: ExamplesTemplate {
        heading: ["مثال بسيط", "أمثلة عملية", "أمثلة متقدمة"],
        body: ":\n\n**مثال 1**: سيناريو أساسي\n- يوضح المفهوم الأساسي في العمل\n- سهل الفهم والتكرار\n\n**مثال 2**: تطبيق من العالم الحقيقي\n- يوضح الاستخدام العملي\n- يسلط الضوء على الأنماط الشائعة وأفضل الممارسات\n\n",
        expert_extra: "**مثال 3**: حالة حدية\n- يستكشف الظروف الحدية\n- يوضح كيفية التعامل مع السيناريوهات المعقدة",
    },
    summary: SummaryTemplate {
        opening: "**النقاط الرئيسية**:\n- حددنا المشكلة الأساسية وقسمناها إلى أجزاء يمكن إدارتها\n- استكشفنا نهجًا منهجيًا لحل المشكلة\n- نظرنا في أمثلة عملية لتعزيز الفهم\n\n**الخطوات التالية**:\n1. ",
        first_step: [
            "تدرب بأمثلة بسيطة",
            "طبق هذا على حالة الاستخدام المحددة الخاصة بك",
            "استكشف الحالات الحدية والتحسينات",
        ],
        bridge: "\n2. ",
        second_step: [
            "اطرح أسئلة إذا كان هناك شيء غير واضح",
            "جرب مع الاختلافات",
            "ضع في اعتبارك الأداء وقابلية التوسع",
        ],
        closing: "\n3. ابنِ على هذا الأساس لمعالجة تحديات أكثر تعقيدًا",
    },
};

pub static HI_IN: LocalePack = LocalePack {
    titles: SectionTitles {
        core_issue: "🎯 मुख्य समस्या",
        breakdown: "🔍 विस्तृत विवरण",
        solution: "💡 चरण-दर-चरण समाधान",
        examples: "📚 उदाहरण",
        summary: "✨ सारांश और अगले कदम",
    },
    safety_refusal: "मैं उस अनुरोध में सहायता प्रदान नहीं कर सकता क्योंकि इसमें हानिकारक, अवैध या असुरक्षित गतिविधियाँ शामिल हो सकती हैं। इसके बजाय, मुझे आपकी मदद करने में खुशी होगी:\n\n1. साइबर सुरक्षा सर्वोत्तम प्रथाओं के बारे में सीखना\n2. कानूनी और नैतिक प्रौद्योगिकी उपयोग को समझना\n3. सुरक्षित और रचनात्मक विकल्पों की खोज करना\n\nमैं एक सुरक्षित और कानूनी विषय के साथ आपकी कैसे सहायता कर सकता हूं?",
    clarification_request: "मैं आपकी मदद करना चाहता हूं, लेकिन सर्वोत्तम उत्तर प्रदान करने के लिए मुझे थोड़ी अधिक जानकारी की आवश्यकता है। क्या आप कृपया स्पष्ट कर सकते हैं:\n\n1. आप किस विशिष्ट पहलू में रुचि रखते हैं?\n2. आपका लक्ष्य क्या है या आप किस समस्या को हल करने का प्रयास कर रहे हैं?\n3. क्या कोई बाधाएं या आवश्यकताएं हैं जिनके बारे में मुझे पता होना चाहिए?\n4. इस विषय पर आपकी वर्तमान समझ का स्तर क्या है?\n\nकृपया अधिक विवरण प्रदान करें ताकि मैं आपको एक व्यापक और सहायक प्रतिक्रिया दे सकूं।",
    core_issue: CoreIssueTemplate {
        intro: "आप पूछ रहे हैं: ",
        bridge: "\n\nयह एक ",
        register: ["मौलिक", "व्यावहारिक", "उन्नत"],
        outro: " विषय है जिसमें प्रमुख अवधारणाओं और उनके संबंधों को समझना शामिल है।",
    },
    breakdown: BreakdownTemplate {
        opening: "आइए इसे प्रबंधनीय भागों में विभाजित करें:\n\n1. **नींव**: ",
        foundation: [
            "मूल बातों से शुरुआत",
            "मुख्य सिद्धांतों पर निर्माण",
            "अंतर्निहित तंत्र की जांच",
        ],
        closing: "\n2. **मुख्य घटक**: शामिल मुख्य तत्व\n3. **संबंध**: ये भाग कैसे परस्पर क्रिया करते हैं\n4. **संदर्भ**: यह बड़ी तस्वीर में कहाँ फिट बैठता है",
    },
    solution: SolutionTemplate {
        opening: "यहाँ एक ",
        approach: ["सरल", "संरचित", "व्यापक"],
        closing: " दृष्टिकोण है:\n\n**चरण 1**: आवश्यकताओं और बाधाओं की पहचान करें\n- समझें कि आप क्या हासिल करने की कोशिश कर रहे हैं\n- किसी भी सीमा या विशिष्ट शर्तों को नोट करें\n\n**चरण 2**: अपने दृष्टिकोण की योजना बनाएं\n- सही विधि या रणनीति चुनें\n- विकल्पों और व्यापार-बंदों पर विचार करें\n\n**चरण 3**: व्यवस्थित रूप से लागू करें\n- नींव से शुरू करें\n- क्रमिक रूप से निर्माण करें और जैसे-जैसे आगे बढ़ें परीक्षण करें\n\n**चरण 4**: सत्यापित करें और परिष्कृत करें\n- अपने परिणामों की जांच करें\n- आवश्यकतानुसार समायोजन करें",
    },
    examples: ExamplesTemplate {
        heading: ["सरल उदाहरण", "व्यावहारिक उदाहरण", "उन्नत उदाहरण"],
        body: ":\n\n**उदाहरण 1**: एक बुनियादी परिदृश्य\n- मौलिक अवधारणा को क्रिया में दिखाता है\n- समझने और दोहराने में आसान\n\n**उदाहरण 2**: एक वास्तविक दुनिया का अनुप्रयोग\n- व्यावहारिक उपयोग प्रदर्शित करता है\n- सामान्य पैटर्न और सर्वोत्तम प्रथाओं को उजागर करता है\n\n",
        expert_extra: "**उदाहरण 3**: एक किनारे का मामला\n- सीमा स्थितियों की पड़ताल करता है\n- जटिल परिदृश्यों को संभालने का तरीका दिखाता है",
    },
    summary: SummaryTemplate {
        opening: "**मुख्य बातें**:\n- हमने मुख्य समस्या की पहचान की और इसे प्रबंधनीय भागों में विभाजित किया\n- हमने समस्या को हल करने के लिए एक व्यवस्थित दृष्टिकोण की खोज की\n- हमने समझ को मजबूत करने के लिए व्यावहारिक उदाहरणों को देखा\n\n**अगले कदम**:\n1. ",
        first_step: [
            "सरल उदाहरणों के साथ अभ्यास करें",
            "इसे अपने विशिष्ट उपयोग मामले पर लागू करें",
            "किनारे के मामलों और अनुकूलन का अन्वेषण करें",
        ],
        bridge: "\n2. ",
        second_step: [
            "यदि कुछ अस्पष्ट है तो प्रश्न पूछें",
            "विविधताओं के साथ प्रयोग करें",
            "प्रदर्शन और स्केलेबिलिटी पर विचार करें",
        ],
        closing: "\n3. अधिक जटिल चुनौतियों से निपटने के लिए इस नींव पर निर्माण करें",
    },
};
